mod rating_test;
