//! Static font-metric tables for the two PDF base-14 fonts the CV uses.
//!
//! Widths come from the Adobe AFM files, in 1/1000 em. Tables cover ASCII
//! 0x20..=0x7E (95 printable characters); index = (char as usize) - 32.
//! Text is folded to ASCII with [`fold_to_ascii`] before it is measured or drawn,
//! so the fallback width only matters for callers that skip folding.

// ────────────────────────────────────────────────────────────────────────────
// Font
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Helvetica,
    HelveticaBold,
}

/// Width slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191,
    333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238,
    333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

/// Width used for anything outside the table.
const FALLBACK_WIDTH: u16 = 556;

impl Font {
    fn widths(self) -> &'static [u16; 95] {
        match self {
            Font::Helvetica => &HELVETICA,
            Font::HelveticaBold => &HELVETICA_BOLD,
        }
    }

    fn char_width(self, c: char) -> u16 {
        let code = c as usize;
        if (32..=126).contains(&code) {
            self.widths()[code - 32]
        } else {
            FALLBACK_WIDTH
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Measuring & wrapping
// ────────────────────────────────────────────────────────────────────────────

/// Rendered width of `text` in points at `size_pt`.
pub fn text_width(text: &str, font: Font, size_pt: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(font.char_width(c))).sum();
    units as f32 * size_pt / 1000.0
}

/// Greedy word-wrap to `max_width_pt`. A single word wider than the line is
/// split at character boundaries. Blank input yields no lines.
///
/// Runs of spaces between words on the same line are kept as written, so
/// `"a  |  b"` separators survive. The gap at a line break is dropped.
pub fn wrap(text: &str, font: Font, size_pt: f32, max_width_pt: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for (gap, word) in words_with_gaps(text) {
        let word_width = text_width(word, font, size_pt);

        if word_width > max_width_pt {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let mut pieces = split_word(word, font, size_pt, max_width_pt);
            // The last fragment stays open so following words can join it.
            if let Some(last) = pieces.pop() {
                lines.extend(pieces);
                current_width = text_width(&last, font, size_pt);
                current = last;
            }
            continue;
        }

        let gap_width = text_width(gap, font, size_pt);
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + gap_width + word_width > max_width_pt {
            lines.push(std::mem::replace(&mut current, word.to_string()));
            current_width = word_width;
        } else {
            current.push_str(gap);
            current.push_str(word);
            current_width += gap_width + word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Splits `text` into words, each paired with the whitespace run before it.
/// Runs of plain spaces are kept; any other whitespace collapses to one space.
fn words_with_gaps(text: &str) -> Vec<(&str, &str)> {
    let mut out = Vec::new();
    let mut rest = text.trim_start();
    let mut gap = "";
    while !rest.is_empty() {
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        out.push((gap, &rest[..end]));
        let after = &rest[end..];
        let trimmed = after.trim_start();
        let run = &after[..after.len() - trimmed.len()];
        gap = if run.chars().all(|c| c == ' ') { run } else { " " };
        rest = trimmed;
    }
    out
}

fn split_word(word: &str, font: Font, size_pt: f32, max_width_pt: f32) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut width = 0.0_f32;
    for c in word.chars() {
        let w = f32::from(font.char_width(c)) * size_pt / 1000.0;
        if !piece.is_empty() && width + w > max_width_pt {
            pieces.push(std::mem::take(&mut piece));
            width = 0.0;
        }
        piece.push(c);
        width += w;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

// ────────────────────────────────────────────────────────────────────────────
// Character folding
// ────────────────────────────────────────────────────────────────────────────

/// Maps text onto printable ASCII, the range the built-in fonts draw reliably.
///
/// Typographic punctuation gets its plain equivalent, common Latin letters lose
/// their accents, anything else becomes `?`.
pub fn fold_to_ascii(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            ' '..='~' => out.push(c),
            '\t' | '\n' | '\r' | '\u{a0}' | '\u{2002}'..='\u{200a}' => out.push(' '),
            '\u{2018}' | '\u{2019}' | '\u{201a}' | '\u{2032}' => out.push('\''),
            '\u{201c}' | '\u{201d}' | '\u{201e}' | '\u{2033}' => out.push('"'),
            '\u{2010}'..='\u{2015}' | '\u{2212}' => out.push('-'),
            '\u{2022}' | '\u{00b7}' | '\u{2023}' | '\u{25cf}' => out.push('-'),
            '\u{2026}' => out.push_str("..."),
            '\u{2192}' => out.push_str("->"),
            '\u{00d7}' => out.push('x'),
            '\u{200b}' | '\u{feff}' => {}
            _ => match strip_accent(c) {
                Some(plain) => out.push(plain),
                None => out.push('?'),
            },
        }
    }
    out
}

fn strip_accent(c: char) -> Option<char> {
    let plain = match c {
        'À'..='Å' => 'A',
        'à'..='å' => 'a',
        'Ç' => 'C',
        'ç' => 'c',
        'È'..='Ë' => 'E',
        'è'..='ë' => 'e',
        'Ì'..='Ï' => 'I',
        'ì'..='ï' => 'i',
        'Ñ' => 'N',
        'ñ' => 'n',
        'Ò'..='Ö' | 'Ø' => 'O',
        'ò'..='ö' | 'ø' => 'o',
        'Ù'..='Ü' => 'U',
        'ù'..='ü' => 'u',
        'Ý' => 'Y',
        'ý' | 'ÿ' => 'y',
        _ => return None,
    };
    Some(plain)
}
