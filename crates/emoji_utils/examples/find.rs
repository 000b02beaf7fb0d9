fn main() -> Result<(), emoji_utils::RegistryLoadError> {
    let registry = emoji_utils::Registry::load_with(&emoji_utils::RegistryConfig::from_env())?;

    let text = "This is a 1️⃣string 😄 🐷 with some 👍🏻 🙈 emoji! 🐷 🏃🏿‍♂️ 🥰";

    for (key, found) in emoji_utils::find_distinct(text, &registry) {
        print!("{key} {} x{} ", found.entry, found.occurrences());
        print_chars(found.entry.glyph().chars());
    }

    if let Some(entry) = registry.find("\u{2764}") {
        print_chars(entry.glyph().chars());
    }

    println!("{}", emoji_utils::strip(text, &registry));

    Ok(())
}

fn print_chars(c: std::str::Chars) {
    for c in c {
        print!("{:X} ", c as u32);
    }
    println!();
}
