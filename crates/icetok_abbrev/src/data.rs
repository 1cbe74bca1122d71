//! Compiled-in default abbreviation table.
//!
//! A representative slice of the kind of entries a shipped abbreviation
//! resource file would carry; this is the default table that
//! `AbbrevTable::default_table()` loads when no caller-supplied
//! configuration is layered in before initialization.

pub const DEFAULT_ABBREVIATIONS: &str = r#"
[abbreviations]

# Titles and honorifics
hr.    = "herra"                     kk
frk.   = "frøken"                    kvk
próf.^ = "prófessor"                 kk  skst
dr.^   = "doktor"                    kk  skst

# Units of time / measurement that also act as sentence-internal words
dags.! = "dagsetning"                kvk
mín.!  = "mínúta"                    kvk
sek.!  = "sekúnda"                   kvk
klst.! = "klukkustund"               kvk

# Common Icelandic discourse abbreviations
o.s.frv.* = "og svo framvegis"       hk
o.fl.* = "og fleira"                 hk
m.a.!  = "meðal annars"              hk
t.d.!  = "til dæmis"                 hk
þ.e.!  = "það er"                    hk
sbr.!  = "samanber"                  hk
skv.!  = "samkvæmt"                  hk
nr.!   = "númer"                     hk
gr.!   = "grein"                     kvk

# Currency / amount abbreviations (also multipliers, see icetok_lexer::tables)
kr.    = "krónur"                    kvk
þús.!  = "þúsund"                    hk
m.kr.! = "milljónir króna"           kvk
ma.kr.! = "milljarðar króna"         kvk
þús.kr.! = "þúsund krónur"           kvk

# Academic / organizational
hdl.^  = "héraðsdómslögmaður"        kk  skst
hrl.^  = "hæstaréttarlögmaður"       kk  skst
ehf.!  = "einkahlutafélag"           hk
hf.!   = "hlutafélag"                hk

# Place/geography
Rvk.^  = "Reykjavík"                 kvk skst
"#;
