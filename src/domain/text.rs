//! 문자열 변환 연산.

/// 단어 첫 글자를 titlecase로, 나머지를 소문자로 바꾼다(title-case 규칙).
/// 대소문자가 있는 글자 뒤가 아니면 새 단어로 본다. 따라서 `they're`는 `They'Re`가 된다.
pub fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(ch) = rest.chars().next() {
        if !is_cased(ch) {
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
            continue;
        }

        let end = rest.find(|c: char| !is_cased(c)).unwrap_or(rest.len());
        let (word, tail) = rest.split_at(end);
        push_titled_word(&mut out, word);
        rest = tail;
    }

    out
}

/// 코드 포인트 단위로 뒤집는다(grapheme cluster는 고려하지 않음).
pub fn reverse_string(text: &str) -> String {
    text.chars().rev().collect()
}

pub fn to_uppercase(text: &str) -> String {
    text.to_uppercase()
}

fn is_cased(ch: char) -> bool {
    ch.is_lowercase() || ch.is_uppercase() || titlecase_letter(ch) == Some(ch)
}

/// 대소문자 글자만 이어진 단어 하나. 꼬리는 단어 전체를 소문자화해 final sigma(ς)를 살린다.
fn push_titled_word(out: &mut String, word: &str) {
    let Some(first) = word.chars().next() else {
        return;
    };
    push_titlecase(out, first);

    let skip = first.to_lowercase().count();
    out.extend(word.to_lowercase().chars().skip(skip));
}

fn push_titlecase(out: &mut String, ch: char) {
    if let Some(title) = titlecase_letter(ch) {
        out.push(title);
        return;
    }

    // 대문자 확장의 첫 글자만 대문자로 둔다(ß -> Ss, ﬁ -> Fi).
    let mut upper = ch.to_uppercase();
    if let Some(head) = upper.next() {
        out.push(head);
    }
    for rest in upper {
        out.extend(rest.to_lowercase());
    }
}

/// 대문자와 titlecase가 다른 글자(Lt)의 titlecase 매핑.
fn titlecase_letter(ch: char) -> Option<char> {
    let code = ch as u32;
    let mapped = match code {
        0x01C4..=0x01C6 => 0x01C5,
        0x01C7..=0x01C9 => 0x01C8,
        0x01CA..=0x01CC => 0x01CB,
        0x01F1..=0x01F3 => 0x01F2,
        0x1F80..=0x1FAF => code | 0x08,
        0x1FB3 | 0x1FBC => 0x1FBC,
        0x1FC3 | 0x1FCC => 0x1FCC,
        0x1FF3 | 0x1FFC => 0x1FFC,
        _ => return None,
    };
    char::from_u32(mapped)
}
