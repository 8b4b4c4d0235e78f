//! Drug-family matching.
//!
//! Contraindication tables name classes ("Fluoroquinolones", "NSAIDs")
//! while drug candidates carry brand or generic names ("Ciprofloxacin").
//! Class and member names are stored in cleaned, singular form.

use crate::models::DrugCandidate;
use crate::scoring::normalize::{clean, find_phrase};

pub struct DrugFamily {
    pub classes: &'static [&'static str],
    pub members: &'static [&'static str],
}

pub const FAMILIES: &[DrugFamily] = &[
    DrugFamily {
        classes: &["penicillin"],
        members: &[
            "penicillin",
            "amoxicillin",
            "ampicillin",
            "piperacillin",
            "oxacillin",
            "nafcillin",
            "dicloxacillin",
            "flucloxacillin",
        ],
    },
    DrugFamily {
        classes: &["cephalosporin"],
        members: &[
            "cephalexin",
            "cefazolin",
            "ceftriaxone",
            "cefuroxime",
            "cefixime",
            "cefpodoxime",
            "ceftazidime",
        ],
    },
    DrugFamily {
        classes: &["sulfonamide", "sulfa drug", "sulfa"],
        members: &[
            "sulfamethoxazole",
            "sulfasalazine",
            "sulfadiazine",
            "sulfisoxazole",
        ],
    },
    DrugFamily {
        classes: &["nsaid", "non steroidal anti inflammatory"],
        members: &[
            "ibuprofen",
            "naproxen",
            "diclofenac",
            "indomethacin",
            "piroxicam",
            "meloxicam",
            "celecoxib",
            "ketorolac",
            "aspirin",
        ],
    },
    DrugFamily {
        classes: &["statin"],
        members: &[
            "atorvastatin",
            "rosuvastatin",
            "simvastatin",
            "pravastatin",
            "lovastatin",
            "fluvastatin",
            "pitavastatin",
        ],
    },
    DrugFamily {
        classes: &["ace inhibitor"],
        members: &[
            "lisinopril",
            "enalapril",
            "ramipril",
            "captopril",
            "benazepril",
            "fosinopril",
            "quinapril",
            "perindopril",
        ],
    },
    DrugFamily {
        classes: &["arb", "angiotensin receptor blocker"],
        members: &[
            "losartan",
            "valsartan",
            "irbesartan",
            "candesartan",
            "telmisartan",
            "olmesartan",
        ],
    },
    DrugFamily {
        classes: &["opioid"],
        members: &[
            "morphine",
            "codeine",
            "oxycodone",
            "hydrocodone",
            "tramadol",
            "fentanyl",
            "hydromorphone",
        ],
    },
    DrugFamily {
        classes: &["fluoroquinolone", "quinolone"],
        members: &[
            "ciprofloxacin",
            "levofloxacin",
            "moxifloxacin",
            "ofloxacin",
            "norfloxacin",
        ],
    },
    DrugFamily {
        classes: &["macrolide"],
        members: &["azithromycin", "clarithromycin", "erythromycin"],
    },
    DrugFamily {
        classes: &["tetracycline"],
        members: &["tetracycline", "doxycycline", "minocycline"],
    },
    DrugFamily {
        classes: &["benzodiazepine"],
        members: &[
            "diazepam",
            "lorazepam",
            "alprazolam",
            "clonazepam",
            "temazepam",
        ],
    },
    DrugFamily {
        classes: &["corticosteroid", "steroid"],
        members: &[
            "prednisone",
            "prednisolone",
            "methylprednisolone",
            "dexamethasone",
            "hydrocortisone",
        ],
    },
    DrugFamily {
        classes: &["beta blocker"],
        members: &[
            "metoprolol",
            "atenolol",
            "propranolol",
            "bisoprolol",
            "carvedilol",
        ],
    },
    DrugFamily {
        classes: &["thiazide", "thiazide diuretic"],
        members: &["hydrochlorothiazide", "chlorthalidone", "indapamide"],
    },
    DrugFamily {
        classes: &["decongestant"],
        members: &[
            "pseudoephedrine",
            "phenylephrine",
            "oxymetazoline",
            "xylometazoline",
        ],
    },
];

/// Words that narrow a table entry without naming a drug.
const QUALIFIERS: &[&str] = &["certain", "some", "multiple"];

/// Shortest word treated as a drug name when matching by token.
const MIN_TOKEN_LEN: usize = 4;

fn singular(word: &str) -> &str {
    if word.len() > 3
        && word.ends_with('s')
        && !word.ends_with("ss")
        && !word.ends_with("us")
        && !word.ends_with("is")
    {
        &word[..word.len() - 1]
    } else {
        word
    }
}

/// Cleaned text with each word in singular form.
pub fn singular_words(text: &str) -> String {
    clean(text)
        .split(' ')
        .filter(|w| !w.is_empty())
        .map(singular)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The drug part of a table entry: text before any parenthetical, cleaned
/// and singularized. "NSAIDs (after 20 weeks)" gives "nsaid".
pub fn entry_head(entry: &str) -> String {
    let head = entry.split('(').next().unwrap_or(entry);
    singular_words(head)
}

/// Family whose class name is exactly `head`.
pub fn family_by_class(head: &str) -> Option<&'static DrugFamily> {
    FAMILIES.iter().find(|f| f.classes.contains(&head))
}

/// Family that lists `name` (or a member contained in it) as a member.
pub fn family_by_member(name: &str) -> Option<&'static DrugFamily> {
    let name = clean(name);
    if name.is_empty() {
        return None;
    }
    FAMILIES
        .iter()
        .find(|f| f.members.iter().any(|m| name.contains(m) || m.contains(name.as_str())))
}

fn in_family(family: &DrugFamily, drug: &DrugCandidate) -> bool {
    let name = clean(&drug.name);
    if family.members.iter().any(|m| name.contains(m)) {
        return true;
    }
    drug.kind.as_deref().is_some_and(|kind| {
        let kind = singular_words(kind);
        family.classes.iter().any(|c| find_phrase(&kind, c).is_some())
    })
}

/// A population or disease table entry applies to `drug`.
///
/// Class entries match every family member by name or class label, and any
/// drug whose name or label carries the class name itself. Other entries
/// match when one of their words appears in the drug's name or class label.
pub fn entry_matches(entry: &str, drug: &DrugCandidate) -> bool {
    let head = entry_head(entry);
    if head.is_empty() {
        return false;
    }

    let name = clean(&drug.name);
    let kind = drug.kind.as_deref().map(singular_words).unwrap_or_default();

    if let Some(family) = family_by_class(&head) {
        return in_family(family, drug)
            || (head.len() >= MIN_TOKEN_LEN && (name.contains(&head) || kind.contains(&head)));
    }

    head.split(' ')
        .filter(|t| t.len() >= MIN_TOKEN_LEN && !QUALIFIERS.contains(t))
        .any(|t| name.contains(t) || kind.contains(t))
}

/// An allergy to `allergen` rules out `drug`: same name (either contains
/// the other), or the same drug family.
pub fn allergy_matches(allergen: &str, drug: &DrugCandidate) -> bool {
    let allergen_clean = clean(allergen);
    let name = clean(&drug.name);
    if allergen_clean.is_empty() || name.is_empty() {
        return false;
    }
    if name.contains(&allergen_clean) || allergen_clean.contains(&name) {
        return true;
    }
    let family = family_by_class(&singular_words(allergen)).or_else(|| family_by_member(allergen));
    family.is_some_and(|f| in_family(f, drug))
}
