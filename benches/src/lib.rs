use unicode_codespace::{Codepoint, Codespace, Settings};

/// версия тестовых справочных данных
pub const UNICODE_VERSION: &str = "15.0.0";

/// справочные данные из ./../test_data
pub fn codespace() -> Codespace
{
    let settings = Settings::new(UNICODE_VERSION, "./../test_data").unwrap();

    Codespace::load(&settings).unwrap()
}

/// наборы кодпоинтов, на которых измеряется время: название набора, кодпоинты
pub fn codepoint_sets() -> Vec<(&'static str, Vec<Codepoint>)>
{
    let range = |from: u32, to: u32| (from ..= to).map(Codepoint::new).collect::<Vec<_>>();

    vec![
        ("ascii", range(0x20, 0x7E)),
        ("cjk", range(0x4E00, 0x4EFF)),
        ("smp", range(0x10300, 0x1034F)),
        ("pua", range(0xE000, 0xE0FF)),
        ("unassigned", range(0x0370, 0x03FF)),
    ]
}

/// запросы нечеткого поиска
pub const SEARCH_QUERIES: &[&str] = &["old", "latin letter", "cjk compatibility", "tangut", "klingon"];
