mod types_map_tests;
