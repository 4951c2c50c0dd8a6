mod bounds_tests;
mod date_value_tests;
mod side_view_tests;
