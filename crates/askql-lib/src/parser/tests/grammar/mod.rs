mod articles_tests;
mod features_tests;
mod namespaces_tests;
mod properties_tests;
mod subqueries_tests;
