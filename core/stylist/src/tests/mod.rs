mod localization_tests;
