use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use sectcfg::{BigInt, Scanned, Section};

#[derive(Clone, Default, Section)]
struct Everything {
    text: String,
    flag: bool,
    small: i8,
    wide: u128,
    size: isize,
    big: BigInt,
    letter: char,
    path: std::path::PathBuf,
    initial: Option<char>,
    float: f32,
    scanned: Scanned<i64>,
    list: Vec<u16>,
    maybe_list: Option<Vec<String>>,
    #[sectcfg(skip)]
    untouched: std::cell::Cell<u8>,
    #[sectcfg(extra_values)]
    extra: BTreeMap<String, String>,
}

#[derive(Clone, Default, Section)]
struct Config {
    single: Everything,
    many: HashMap<String, Box<Everything>>,
    ordered: IndexMap<String, Box<Everything>>,
    flat: BTreeMap<String, String>,
    flat_ordered: IndexMap<String, String>,
}

fn main() {
    let mut config = Config::default();
    let _ = sectcfg::Assigner::new(&mut config);
}
