use phf::{Map, phf_map};

static RESIDUE_FORMAL_CHARGES: Map<&'static str, i32> = phf_map! {
    "ARG" => 1, "LYS" => 1, "HIP" => 1,
    "ASP" => -1, "GLU" => -1, "CYM" => -1,
};

static ONE_LETTER_CODES: Map<char, &'static str> = phf_map! {
    'A' => "ALA", 'R' => "ARG", 'N' => "ASN", 'D' => "ASP", 'C' => "CYS",
    'Q' => "GLN", 'E' => "GLU", 'G' => "GLY", 'H' => "HIS", 'I' => "ILE",
    'L' => "LEU", 'K' => "LYS", 'M' => "MET", 'F' => "PHE", 'P' => "PRO",
    'S' => "SER", 'T' => "THR", 'W' => "TRP", 'Y' => "TYR", 'V' => "VAL",
};

// Keyed by the lowercase element symbol; value is (canonical name, charge).
static IONS: Map<&'static str, (&'static str, i32)> = phf_map! {
    "li" => ("Li+", 1), "na" => ("Na+", 1), "k" => ("K+", 1),
    "rb" => ("Rb+", 1), "cs" => ("Cs+", 1),
    "f" => ("F-", -1), "cl" => ("Cl-", -1), "br" => ("Br-", -1), "i" => ("I-", -1),
};

pub fn residue_formal_charge(residue_name: &str) -> i32 {
    RESIDUE_FORMAL_CHARGES
        .get(residue_name.trim().to_ascii_uppercase().as_str())
        .copied()
        .unwrap_or(0)
}

pub fn three_letter_code(code: char) -> Option<&'static str> {
    ONE_LETTER_CODES.get(&code.to_ascii_uppercase()).copied()
}

/// Looks up a monatomic ion, ignoring case and any trailing charge signs.
pub fn lookup_ion(name: &str) -> Option<(&'static str, i32)> {
    let symbol = name.trim().trim_end_matches(['+', '-']).to_ascii_lowercase();
    IONS.get(symbol.as_str()).copied()
}
