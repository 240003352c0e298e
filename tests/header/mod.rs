mod header_of_short_file_fails;
