use proptest::prelude::*;
use unicode_codespace::{paginate_cursor, CharacterType, Codepoint, Scope, ScopeUnit};

use crate::data::CODESPACE;

proptest! {
    /// блок кодпоинта содержит его, плоскость блока содержит блок
    #[test]
    fn block_and_plane_contain_codepoint(code in 0u32 ..= 0x10FFFF)
    {
        let codepoint = Codepoint::new(code);
        let block = CODESPACE.block_containing(codepoint);

        if !block.is_null() {
            prop_assert!(block.contains(code));

            let plane = CODESPACE.plane_containing(block.id);
            prop_assert!(plane.contains_block(block.id));
            prop_assert!((plane.start ..= plane.finish).contains(&code));
        }

        let containing = CODESPACE.blocks().iter().filter(|b| b.contains(code)).count();
        prop_assert_eq!(containing, match block.is_null() { true => 0, false => 1 });
    }

    /// у каждого кодпоинта есть название, кроме не назначенных в тестовых данных символов
    #[test]
    fn every_codepoint_is_named(code in 0u32 ..= 0x11FFFF)
    {
        let codepoint = Codepoint::new(code);
        let name = CODESPACE.character_name(codepoint);

        prop_assert!(!name.is_empty());

        match CODESPACE.classify(codepoint) {
            CharacterType::Invalid => prop_assert!(name.starts_with("Invalid Codepoint")),
            CharacterType::Reserved => prop_assert_eq!(name, format!("<reserved-{:04X}>", code)),
            _ => (),
        }
    }

    /// "XXXX" и "U+XXXX" дают одно и то же отображение
    #[test]
    fn mapped_hex(code in 1u32 ..= 0x10FFFF)
    {
        let codepoint = Codepoint::new(code);
        let mapped = CODESPACE.mapped_codepoint(codepoint);

        prop_assert_eq!(&CODESPACE.mapped_codepoint_from_hex(&format!("{:X}", code)), &mapped);
        prop_assert_eq!(&CODESPACE.mapped_codepoint_from_hex(&codepoint.to_string()), &mapped);
    }

    /// окно не выходит за пределы области и не больше limit
    #[test]
    fn cursor_window(lo in 0u32 .. 1000, len in 0u32 .. 1000, after in 0u32 .. 2000, limit in 1usize ..= 100)
    {
        let scope = Scope::new(lo, lo + len, "scope", ScopeUnit::BlockId);

        match paginate_cursor(&scope, Some(after), None, limit) {
            Ok(window) => {
                prop_assert!(window.start >= lo && window.start <= lo + len);
                prop_assert!(window.stop <= lo + len + 1);
                prop_assert!((window.stop - window.start) as usize <= limit);
                prop_assert_eq!(window.has_more, window.stop <= lo + len);
            }
            Err(_) => prop_assert!(after + 1 < lo || after + 1 > lo + len),
        }
    }
}
