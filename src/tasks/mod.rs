pub mod poll_parameters;
