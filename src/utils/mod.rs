pub mod name_case;
