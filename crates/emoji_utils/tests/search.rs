use emoji_utils::{bundled, find_distinct, scan, strip, Registry};

fn check(registry: &Registry, text: &str, distinct: usize, stripped: &str) {
    let found = find_distinct(text, registry);

    assert_eq!(found.len(), distinct, "distinct emoji in {text:?}: {:?}", found.keys().collect::<Vec<_>>());
    assert_eq!(strip(text, registry), stripped);
}

#[test]
fn test_continuous_emoji() {
    let registry = bundled().unwrap();

    check(&registry, "abc🙏🙏🙏🙏🙏", 1, "abc");
    assert_eq!(scan("abc🙏🙏🙏🙏🙏", &registry).count(), 5);
}

#[test]
fn test_remove_all_emoji() {
    let registry = bundled().unwrap();
    let text = "This is a 1️⃣string 😄 🐷 with some 👍🏻 🙈 emoji! 🐷 🏃🏿‍♂️ 🥰";

    check(&registry, text, 7, "This is a string with some emoji!");

    let found = find_distinct(text, &registry);
    assert_eq!(found.values().find(|f| f.entry.glyph() == "🐷").unwrap().occurrences(), 2);
    assert_eq!(found.values().map(|f| f.occurrences()).sum::<usize>(), 8);

    let runner = found.values().find(|f| f.entry.glyph() == "🏃🏿‍♂️").unwrap();
    assert_eq!(runner.entry.key().to_string(), "1F3C3-1F3FF-200D-2642-FE0F");
}

#[test]
fn test_remove_all_connector_emoji() {
    let registry = bundled().unwrap();

    check(
        &registry,
        "This is a string 👨‍👩‍👦‍👦 👨‍👩‍👦‍👦 with 👩‍❤️‍👩 some 🙈 emoji! 🕵️‍♂️ 🤼‍♂️ 👩‍👧‍👦",
        6,
        "This is a string with some emoji!",
    );
}

#[test]
fn test_remove_all_sticked_emoji() {
    let registry = bundled().unwrap();

    check(
        &registry,
        "This is a string 👨‍👩‍👦‍👦👨‍👩‍👦‍👦with👩‍❤️‍👩 some 🙈emoji! 🕵️‍♂️🤼‍♂️👩‍👧‍👦",
        6,
        "This is a string with some emoji!",
    );
}

#[test]
fn test_remove_all_emoji_chinese() {
    let registry = bundled().unwrap();

    check(&registry, "起坎特在🇫🇷队的作用更      哈哈哈", 1, "起坎特在队的作用更 哈哈哈");
}

#[test]
fn test_remove_all_emoji_chinese_english_mixed() {
    let registry = bundled().unwrap();

    check(
        &registry,
        "wo🤮🤧武斌💁ello a武斌 g😇 🤠ood peo👌🎍😍ello",
        8,
        "wo武斌ello a武斌 g ood peoello",
    );
}

#[test]
fn test_remove_all_emoji_japanese() {
    let registry = bundled().unwrap();

    check(
        &registry,
        "被害者は深刻な影響を🤮🤧受けるにもか💁かわらず、被害だと😇 🤠認識できるま👌🎍😍で時間がかかり",
        8,
        "被害者は深刻な影響を受けるにもかかわらず、被害だと 認識できるまで時間がかかり",
    );
}

#[test]
fn test_remove_all_emoji_korean() {
    let registry = bundled().unwrap();

    check(
        &registry,
        "포기하고 싶은 순🤮간들 바💁로 그 순간   🤠빨리 '희망의🤧 스위치'😇👌🎍😍를 올리자. 찰칵! ",
        8,
        "포기하고 싶은 순간들 바로 그 순간 빨리 '희망의 스위치'를 올리자. 찰칵!",
    );
}

#[test]
fn test_adjacent_emoji_between_cjk() {
    let registry = bundled().unwrap();

    check(&registry, "武柳💁👌🎍😍昊雨", 4, "武柳昊雨");
}

#[test]
fn test_plain_text_untouched() {
    let registry = bundled().unwrap();

    for text in [
        "Plain ASCII text, with punctuation: #1 * 2 = 2!",
        "© 2024 Example™ ☀ ♂",
        "Ünïcödé çåfé naïve",
        "Привет, мир",
        "مرحبا بالعالم",
    ] {
        assert_eq!(scan(text, &registry).count(), 0, "{text:?}");
        assert_eq!(strip(text, &registry), text);
    }
}

#[test]
fn test_strip_properties() {
    let registry = bundled().unwrap();

    for text in [
        "This is a 1️⃣string 😄 🐷 with some 👍🏻 🙈 emoji! 🐷 🏃🏿‍♂️ 🥰",
        "  🇫🇷🇩🇪🇯🇵  flags\n\n🏴󠁧󠁢󠁳󠁣󠁴󠁿 and tags ",
        "keycaps #️⃣ *️⃣ 0️⃣ 9️⃣ and digits 0 9",
        "🏳️‍🌈🏴‍☠️👁️‍🗨️",
        "unqualified 🕵‍♂ and ☀ with qualified ☀️",
        "\t\r\n",
        "🇫🙏🇷",
        "1🙏\u{FE0F}\u{20E3}",
        "🕵🙏\u{FE0F} detective",
        "🇫🇫🙏🇷🇷",
    ] {
        let once = strip(text, &registry);

        assert_eq!(strip(&once, &registry), once, "{text:?}");
        assert_eq!(scan(&once, &registry).count(), 0, "{text:?}");
        assert!(once.len() <= text.len());
        assert!(!once.starts_with(char::is_whitespace));
        assert!(!once.ends_with(char::is_whitespace));
        assert!(!once.contains("  "));
    }

    assert_eq!(strip("keycaps #️⃣ *️⃣ 0️⃣ 9️⃣ and digits 0 9", &registry), "keycaps and digits 0 9");
    assert_eq!(strip("🏳️‍🌈🏴‍☠️👁️‍🗨️", &registry), "");
}

#[test]
fn test_strip_rejoined_sequences() {
    let registry = bundled().unwrap();

    // halves of a flag around another emoji
    assert_eq!(strip("🇫🙏🇷", &registry), "");
    assert_eq!(strip("Allez 🇫😄🇷 !", &registry), "Allez !");
    assert_eq!(strip("🇫🇫🙏🇷🇷", &registry), "");

    // keycap base cut off from its tail
    assert_eq!(strip("1🙏\u{FE0F}\u{20E3}", &registry), "");
    assert_eq!(strip("1🙏\u{FE0F}\u{20E3}23", &registry), "23");

    // text-default base cut off from its variation selector
    assert_eq!(strip("🕵🙏\u{FE0F} detective", &registry), "detective");

    // the gender tail matches on its own first, leaving only the joiner
    assert_eq!(strip("🕵🙏\u{FE0F}\u{200D}♂\u{FE0F}", &registry), "\u{200D}");
}

#[test]
fn test_scan_spans_are_exact() {
    let registry = bundled().unwrap();
    let text = "a👨‍👩‍👦‍👦b🏴󠁧󠁢󠁥󠁮󠁧󠁿c🙅🏻‍♂️🙅🏻‍♂️d";

    let mut last_end = 0;
    let mut glyphs = Vec::new();

    for m in scan(text, &registry) {
        assert!(m.start >= last_end);
        assert_eq!(m.as_str(text), m.entry.glyph());

        last_end = m.end;
        glyphs.push(m.entry.descriptor());
    }

    assert_eq!(glyphs.len(), 4);
    assert_eq!(glyphs[1], "Flag: England");
    assert_eq!(strip(text, &registry), "abcd");
}
