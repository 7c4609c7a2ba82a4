pub mod post_test;
