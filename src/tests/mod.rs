mod report_tests;
mod relation_table_tests;
