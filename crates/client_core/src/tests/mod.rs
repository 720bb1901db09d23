mod lib_tests;
