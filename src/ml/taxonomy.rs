/// Category taxonomy for model output classes.
///
/// Maps a model class index to its human-readable category name and the
/// offense subcategories it aggregates. The table mirrors the label grouping
/// used when the model was trained; it is static configuration, not derived
/// from the model artifact, so a model with more classes than the table
/// covers is handled by the responder's UNKNOWN fallback.

/// A single output class: category name plus its offense subcategories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub name: &'static str,
    pub subcategories: &'static [&'static str],
}

/// Class-index-ordered taxonomy. Index positions must match the label
/// encoding used at training time.
pub const CATEGORIES: [CategoryInfo; 4] = [
    CategoryInfo {
        name: "DRUGS/ALCOHOL",
        subcategories: &[
            "DANGEROUS DRUGS",
            "INTOXICATED & IMPAIRED DRIVING",
            "ALCOHOLIC BEVERAGE CONTROL LAW",
            "INTOXICATED/IMPAIRED DRIVING",
            "UNDER THE INFLUENCE OF DRUGS",
            "LOITERING FOR DRUG PURPOSES",
        ],
    },
    CategoryInfo {
        name: "PERSONAL",
        subcategories: &[
            "ASSAULT 3 & RELATED OFFENSES",
            "FELONY ASSAULT",
            "OFFENSES AGAINST THE PERSON",
            "HOMICIDE-NEGLIGENT,UNCLASSIFIE",
            "HOMICIDE-NEGLIGENT-VEHICLE",
            "KIDNAPPING & RELATED OFFENSES",
            "ENDAN WELFARE INCOMP",
            "OFFENSES RELATED TO CHILDREN",
            "CHILD ABANDONMENT/NON SUPPORT",
            "KIDNAPPING",
            "DANGEROUS WEAPONS",
            "UNLAWFUL POSS. WEAP. ON SCHOOL",
        ],
    },
    CategoryInfo {
        name: "PROPERTY",
        // "FRAUDS" appears twice in the training labels; kept verbatim so the
        // response payload matches the published contract.
        subcategories: &[
            "BURGLARY",
            "PETIT LARCENY",
            "GRAND LARCENY",
            "ROBBERY",
            "THEFT-FRAUD",
            "GRAND LARCENY OF MOTOR VEHICLE",
            "FORGERY",
            "JOSTLING",
            "ARSON",
            "PETIT LARCENY OF MOTOR VEHICLE",
            "OTHER OFFENSES RELATED TO THEF",
            "BURGLAR'S TOOLS",
            "FRAUDS",
            "POSSESSION OF STOLEN PROPERTY",
            "CRIMINAL MISCHIEF & RELATED OF",
            "OFFENSES INVOLVING FRAUD",
            "FRAUDS",
            "THEFT OF SERVICES",
        ],
    },
    CategoryInfo {
        name: "SEXUAL",
        subcategories: &[
            "SEX CRIMES",
            "HARRASSMENT 2",
            "RAPE",
            "PROSTITUTION & RELATED OFFENSES",
            "FELONY SEX CRIMES",
            "LOITERING/DEVIATE SEX",
        ],
    },
];

/// Look up the category for a model class index.
pub fn category_for(index: usize) -> Option<&'static CategoryInfo> {
    CATEGORIES.get(index)
}

/// Number of classes the taxonomy covers.
pub fn n_categories() -> usize {
    CATEGORIES.len()
}
