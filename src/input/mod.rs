pub mod normal_mode;
