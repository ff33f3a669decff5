mod arbitrary;
mod monoid;
