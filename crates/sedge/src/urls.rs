pub fn relativize(url: &str) -> String {
    if url.starts_with('/') {
        url.to_string()
    } else {
        format!("/{url}")
    }
}

pub fn anchor_slug(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_separator = false;

    for character in lowered.chars() {
        if character.is_whitespace() {
            pending_separator = true;
        } else if character.is_ascii_alphanumeric() || character == '_' || character == '-' {
            if pending_separator {
                slug.push('-');
                pending_separator = false;
            }
            slug.push(character);
        }
        // Other characters drop out before the whitespace run collapses.
    }

    if pending_separator {
        slug.push('-');
    }

    slug
}
