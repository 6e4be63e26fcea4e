pub mod tablist;
