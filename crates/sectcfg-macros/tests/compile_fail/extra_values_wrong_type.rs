use std::collections::HashMap;

use sectcfg::Section;

#[derive(Section)]
struct Alias {
    #[sectcfg(extra_values)]
    commands: HashMap<String, u32>,
}

fn main() {}
