use sectcfg::Section;

#[derive(Section)]
enum Config {
    Core,
}

fn main() {}
