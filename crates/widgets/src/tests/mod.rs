mod accordion_tests;
mod dropdown_tests;
