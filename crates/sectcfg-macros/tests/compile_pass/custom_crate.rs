use sectcfg_macros::Section;

#[derive(Clone, Default, Section)]
#[sectcfg(crate = ::sectcfg)]
struct Core {
    editor: String,
}

#[derive(Clone, Default, Section)]
#[sectcfg(crate = ::sectcfg)]
struct Config {
    core: Core,
}

fn main() {
    let mut config = Config::default();
    let _ = sectcfg::assign_all(&mut config, [sectcfg::Entry::value("core", None, "editor", "vi")]);
}
