mod demand;
mod utils;
