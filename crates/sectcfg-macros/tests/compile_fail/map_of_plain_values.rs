use std::collections::HashMap;

use sectcfg::Section;

#[derive(Section)]
struct Config {
    ports: HashMap<String, u16>,
}

fn main() {}
