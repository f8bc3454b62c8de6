pub mod test_vesting_state;
