use crate::domain::model::{LineKind, Locale};

pub fn incomplete_prompt(locale: Locale) -> String {
    match locale {
        Locale::En => "Please fill in every cell.".to_string(),
        Locale::Es => "Por favor, completá todas las celdas.".to_string(),
    }
}

pub fn success(locale: Locale, expected: i128) -> String {
    match locale {
        Locale::En => format!("It is a valid magic square! Sum: {}", expected),
        Locale::Es => format!("¡Es un cuadrado mágico correcto! Suma: {}", expected),
    }
}

pub fn failure(locale: Locale, expected: i128) -> String {
    match locale {
        Locale::En => format!("Not a magic square. Expected sum: {}", expected),
        Locale::Es => format!("No es un cuadrado mágico. Suma esperada: {}", expected),
    }
}

/// 行標籤，列與欄以 1 起算
pub fn line_label(locale: Locale, kind: LineKind) -> String {
    match (locale, kind) {
        (Locale::En, LineKind::Row(i)) => format!("Row {}", i + 1),
        (Locale::En, LineKind::Column(j)) => format!("Column {}", j + 1),
        (Locale::En, LineKind::MainDiagonal) => "Main diagonal".to_string(),
        (Locale::En, LineKind::AntiDiagonal) => "Anti-diagonal".to_string(),
        (Locale::Es, LineKind::Row(i)) => format!("Fila {}", i + 1),
        (Locale::Es, LineKind::Column(j)) => format!("Columna {}", j + 1),
        (Locale::Es, LineKind::MainDiagonal) => "Diagonal principal".to_string(),
        (Locale::Es, LineKind::AntiDiagonal) => "Diagonal secundaria".to_string(),
    }
}
