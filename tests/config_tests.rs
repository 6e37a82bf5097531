use ustack::{StackConfig, UStack, UStackError};

#[test]
fn test_config_defaults_reach_the_stack() {
    let stack = UStack::<u32>::new(1).unwrap();

    assert_eq!(stack.config(), &StackConfig::default());
    assert_eq!(stack.capacity(), 32);
}

#[test]
fn test_config_custom_floor() {
    let mut config = StackConfig::default();
    assert_eq!(config.set_min_capacity(4), Ok(32));

    let mut stack = UStack::<u32>::with_config(1, config).unwrap();
    assert_eq!(stack.capacity(), 4);

    for i in 0..5 {
        stack.push(i).unwrap();
    }
    assert_eq!(stack.capacity(), 8);
}

#[test]
fn test_config_setter_chain_returns_previous() {
    let mut config = StackConfig::default();

    assert_eq!(config.set_shrink_threshold(64), Ok(256));
    assert_eq!(config.set_shrink_threshold(128), Ok(64));
    assert_eq!(config.shrink_threshold(), 128);
}

#[test]
fn test_config_is_per_instance() {
    let mut first = UStack::<u8>::new(0).unwrap();
    let second = UStack::<u8>::new(0).unwrap();

    first.config_mut().set_dump_window(1).unwrap();

    assert_eq!(first.config().dump_window(), 1);
    assert_eq!(second.config().dump_window(), 8);
}

#[test]
fn test_config_low_shrink_threshold() {
    let config = StackConfig::new(4, 4, 8).unwrap();
    let mut stack = UStack::<u64>::with_config(0, config).unwrap();

    for i in 0..32 {
        stack.push(i).unwrap();
    }
    assert_eq!(stack.capacity(), 32);

    for _ in 0..17 {
        stack.pop().unwrap();
    }
    assert_eq!(stack.len(), 15);
    assert_eq!(stack.capacity(), 16);

    while stack.pop().is_ok() {}
    assert_eq!(stack.capacity(), 4);
}

#[test]
fn test_config_invalid_construction() {
    assert_eq!(
        StackConfig::new(0, 1, 1),
        Err(UStackError::InvalidArgument {
            parameter: "min_capacity",
            value: 0
        })
    );
}
