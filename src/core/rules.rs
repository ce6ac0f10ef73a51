use serde::Serialize;

/// Maximum number of meal suggestions shown for a single cocktail.
pub const MAX_PAIRINGS: usize = 6;

/// How a pairing rule is sent to the meal API: as a cuisine area filter
/// or as a dish category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Area,
    Category,
}

/// A single (kind, value) pairing rule, e.g. "Mexican cuisine" or
/// "Seafood dishes". Values are already spelled the way the meal API
/// expects them in its filter parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PairingRule {
    pub kind: RuleKind,
    pub value: &'static str,
}

impl PairingRule {
    pub const fn area(value: &'static str) -> Self {
        Self { kind: RuleKind::Area, value }
    }

    pub const fn category(value: &'static str) -> Self {
        Self { kind: RuleKind::Category, value }
    }
}

impl std::fmt::Display for PairingRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            RuleKind::Area => write!(f, "{} cuisine", self.value),
            RuleKind::Category => write!(f, "{} dishes", self.value),
        }
    }
}

/// A set of spirit/liqueur keywords and the pairing rules they map to.
/// Groups are scanned in declaration order; the first group with any key
/// present in a drink's filtered ingredient set wins.
#[derive(Debug, Clone, Copy)]
pub struct CandidateGroup {
    /// Lowercase ingredient names that identify the dominant spirit.
    pub match_keys: &'static [&'static str],
    /// Rules to choose from when this group matches, one picked at random.
    pub options: &'static [PairingRule],
}

/// Keyword table mapping dominant spirits and liqueurs to food pairings.
/// Order matters: for a margarita ("tequila" + "triple sec") the tequila
/// group must win over the orange-liqueur group.
pub const CANDIDATE_GROUPS: &[CandidateGroup] = &[
    CandidateGroup {
        match_keys: &["tequila", "mezcal"],
        options: &[
            PairingRule::area("Mexican"),
            PairingRule::category("Pork"),
            PairingRule::category("Seafood"),
        ],
    },
    CandidateGroup {
        match_keys: &["triple sec", "cointreau", "grand marnier", "orange curacao", "blue curacao"],
        options: &[
            PairingRule::area("French"),
            PairingRule::category("Dessert"),
        ],
    },
    CandidateGroup {
        match_keys: &["rum", "dark rum", "light rum", "white rum", "spiced rum", "coconut rum", "malibu rum", "cachaca"],
        options: &[
            PairingRule::area("Jamaican"),
            PairingRule::area("Thai"),
            PairingRule::category("Chicken"),
        ],
    },
    CandidateGroup {
        match_keys: &["gin", "sloe gin"],
        options: &[
            PairingRule::area("British"),
            PairingRule::category("Lamb"),
            PairingRule::category("Starter"),
        ],
    },
    CandidateGroup {
        match_keys: &["vodka", "absolut vodka", "citrus vodka", "vanilla vodka"],
        options: &[
            PairingRule::area("Russian"),
            PairingRule::category("Seafood"),
            PairingRule::category("Pasta"),
        ],
    },
    CandidateGroup {
        match_keys: &["whiskey", "whisky", "bourbon", "scotch", "rye whiskey", "irish whiskey"],
        options: &[
            PairingRule::area("American"),
            PairingRule::category("Beef"),
            PairingRule::category("Pork"),
        ],
    },
    CandidateGroup {
        match_keys: &["brandy", "cognac", "apricot brandy", "cherry brandy"],
        options: &[
            PairingRule::area("French"),
            PairingRule::category("Beef"),
            PairingRule::category("Dessert"),
        ],
    },
    CandidateGroup {
        match_keys: &["amaretto", "campari", "aperol", "sweet vermouth", "dry vermouth", "sambuca"],
        options: &[
            PairingRule::area("Italian"),
            PairingRule::category("Pasta"),
        ],
    },
    CandidateGroup {
        match_keys: &["sake"],
        options: &[
            PairingRule::area("Japanese"),
            PairingRule::category("Seafood"),
        ],
    },
    CandidateGroup {
        match_keys: &["irish cream", "baileys irish cream", "coffee liqueur", "kahlua"],
        options: &[
            PairingRule::area("Irish"),
            PairingRule::category("Dessert"),
        ],
    },
    CandidateGroup {
        match_keys: &["champagne", "prosecco", "sparkling wine", "white wine", "red wine"],
        options: &[
            PairingRule::area("French"),
            PairingRule::category("Starter"),
            PairingRule::category("Seafood"),
        ],
    },
];

/// Fallback pool: used both when no candidate group matches a drink and
/// as the cascade tried (in shuffled order) when the primary lookup
/// fails or comes back empty.
pub const DEFAULT_PAIRINGS: &[PairingRule] = &[
    PairingRule::area("Italian"),
    PairingRule::area("Chinese"),
    PairingRule::area("Indian"),
    PairingRule::category("Chicken"),
    PairingRule::category("Pasta"),
    PairingRule::category("Seafood"),
];

/// Ingredients that say nothing about the dominant spirit: ice, juices,
/// syrups, bitters, garnishes, dairy and soft mixers. Names are lowercase
/// and compared against trimmed, lowercased ingredient names.
pub const FILLER_INGREDIENTS: &[&str] = &[
    "ice",
    "crushed ice",
    "water",
    "soda water",
    "club soda",
    "tonic water",
    "ginger ale",
    "ginger beer",
    "cola",
    "lemonade",
    "lemon-lime soda",
    "7-up",
    "sprite",
    "lemon juice",
    "lime juice",
    "orange juice",
    "pineapple juice",
    "cranberry juice",
    "grapefruit juice",
    "apple juice",
    "tomato juice",
    "passion fruit juice",
    "sugar",
    "brown sugar",
    "powdered sugar",
    "sugar syrup",
    "simple syrup",
    "grenadine",
    "honey",
    "agave syrup",
    "maple syrup",
    "bitters",
    "angostura bitters",
    "orange bitters",
    "peach bitters",
    "mint",
    "fresh mint",
    "basil",
    "rosemary",
    "lemon",
    "lime",
    "orange",
    "lemon peel",
    "orange peel",
    "lime peel",
    "cherry",
    "maraschino cherry",
    "olive",
    "celery",
    "cucumber",
    "salt",
    "pepper",
    "nutmeg",
    "cinnamon",
    "milk",
    "cream",
    "heavy cream",
    "light cream",
    "whipped cream",
    "egg white",
    "egg yolk",
    "egg",
];
