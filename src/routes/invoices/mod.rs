pub mod most_expensive;
