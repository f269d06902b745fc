mod option;
mod result;
