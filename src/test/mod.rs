mod test_generator;
