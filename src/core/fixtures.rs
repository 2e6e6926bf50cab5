//! Fixture data structures and the compiled-in project catalog.
//!
//! Defines the `ProjectFixture` record describing one demo project type and
//! the `ProjectCatalog` that resolves project-type identifiers to fixtures.
//! All data is fictional and fixed at compile time; the catalog is built once
//! and never mutated, so it is safe to share from any number of readers.

use once_cell::sync::Lazy;
use serde::Serialize;
use thiserror::Error;

/// A single permit required by a demo project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermitRecord {
    /// Display name of the permit
    pub name: String,

    /// Fee as a preformatted display string (e.g. "$125.00")
    pub fee: String,

    /// Processing time as a display string (e.g. "3-5 business days")
    pub processing_time: String,

    /// Whether this permit is required for the project
    pub required: bool,

    /// Names of the application forms attached to this permit
    pub forms: Vec<String>,
}

impl PermitRecord {
    fn new(name: &str, fee: &str, processing_time: &str, forms: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            fee: fee.to_string(),
            processing_time: processing_time.to_string(),
            required: true,
            forms: forms.iter().map(|f| (*f).to_string()).collect(),
        }
    }
}

/// A building-code reference relevant to a demo project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeReference {
    /// Short title of the code section
    pub title: String,

    /// Citation (e.g. "IBC Section R507")
    pub code_citation: String,

    /// One-sentence summary of what the section covers
    pub description: String,
}

impl CodeReference {
    fn new(title: &str, code_citation: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            code_citation: code_citation.to_string(),
            description: description.to_string(),
        }
    }
}

/// Everything the demo knows about one project type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectFixture {
    /// Stable identifier used for lookup (e.g. "deck")
    pub id: String,

    /// Display label shown on the intro cards
    pub label: String,

    /// Emoji icon shown next to the label
    pub icon: String,

    /// One-line project description
    pub description: String,

    /// Permits required for this project, in display order
    pub permits: Vec<PermitRecord>,

    /// Precomputed total fees display string
    pub total_cost: String,

    /// Precomputed total timeline display string
    pub total_time: String,

    /// Inspection stages in schedule order
    pub inspections: Vec<String>,

    /// Building codes worth reviewing before construction
    pub related_codes: Vec<CodeReference>,
}

impl ProjectFixture {
    /// All form names across this project's permits, in display order.
    pub fn form_names(&self) -> Vec<&str> {
        self.permits.iter().flat_map(|p| p.forms.iter().map(String::as_str)).collect()
    }
}

/// Error returned when a CLI argument names a project type the catalog
/// does not know.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown project type '{0}' (expected one of: deck, bathroom, fence, solar)")]
pub struct UnknownProjectType(pub String);

/// Read-only lookup from project-type identifier to fixture.
///
/// The set of valid identifiers is closed and fixed at compile time. A miss
/// is an expected, handled case: `get` returns `None` and `related_codes`
/// returns an empty slice rather than an error.
#[derive(Debug)]
pub struct ProjectCatalog {
    projects: Vec<ProjectFixture>,
}

static CATALOG: Lazy<ProjectCatalog> = Lazy::new(ProjectCatalog::build);

impl ProjectCatalog {
    /// The compiled-in demo catalog.
    pub fn builtin() -> &'static Self {
        &CATALOG
    }

    /// Look up a fixture by project-type identifier.
    pub fn get(&self, id: &str) -> Option<&ProjectFixture> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Whether `id` names a known project type.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Look up a fixture, failing with a typed error for CLI reporting.
    pub fn resolve(&self, id: &str) -> Result<&ProjectFixture, UnknownProjectType> {
        self.get(id).ok_or_else(|| UnknownProjectType(id.to_string()))
    }

    /// Related building codes for a project type, in display order.
    ///
    /// Unknown identifiers yield an empty slice; no error is raised.
    pub fn related_codes(&self, id: &str) -> &[CodeReference] {
        self.get(id).map_or(&[], |p| p.related_codes.as_slice())
    }

    /// All fixtures in intro-card display order.
    pub fn projects(&self) -> &[ProjectFixture] {
        &self.projects
    }

    /// All known project-type identifiers.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.projects.iter().map(|p| p.id.as_str())
    }

    /// Number of project types in the catalog.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether the catalog is empty (never true for the builtin catalog).
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    fn build() -> Self {
        Self { projects: vec![deck(), bathroom(), fence(), solar()] }
    }
}

fn deck() -> ProjectFixture {
    ProjectFixture {
        id: "deck".to_string(),
        label: "Build a Deck".to_string(),
        icon: "🏡".to_string(),
        description: "12x16 wooden deck".to_string(),
        permits: vec![
            PermitRecord::new(
                "Building Permit - Deck Construction",
                "$125.00",
                "3-5 business days",
                &["Application Form A-101", "Site Plan Worksheet"],
            ),
            PermitRecord::new(
                "Zoning Compliance Review",
                "$50.00",
                "2-3 business days",
                &["Zoning Checklist Z-200"],
            ),
        ],
        total_cost: "$175.00".to_string(),
        total_time: "5-8 business days".to_string(),
        inspections: vec!["Foundation".to_string(), "Framing".to_string(), "Final".to_string()],
        related_codes: vec![
            CodeReference::new(
                "Deck Construction Standards",
                "IBC Section R507",
                "Covers structural requirements for exterior decks including joist spacing, \
                 beam sizing, and connection methods.",
            ),
            CodeReference::new(
                "Guardrail and Handrail Requirements",
                "IBC Section R312",
                "Specifies minimum guardrail heights (36\") and maximum opening sizes (4\") \
                 for elevated decks.",
            ),
            CodeReference::new(
                "Footing and Foundation Requirements",
                "IBC Section R403",
                "Details frost depth requirements and footing specifications for deck \
                 support posts.",
            ),
            CodeReference::new(
                "Ledger Board Attachment",
                "IBC Section R507.2.3",
                "Specifies proper methods for attaching deck ledgers to house structures \
                 including fastener spacing.",
            ),
        ],
    }
}

fn bathroom() -> ProjectFixture {
    ProjectFixture {
        id: "bathroom".to_string(),
        label: "Bathroom Remodel".to_string(),
        icon: "🚿".to_string(),
        description: "Full renovation".to_string(),
        permits: vec![
            PermitRecord::new(
                "Building Permit - Interior Alteration",
                "$200.00",
                "5-7 business days",
                &["Application Form A-102"],
            ),
            PermitRecord::new(
                "Plumbing Permit",
                "$85.00",
                "3-4 business days",
                &["Plumbing Application P-300"],
            ),
            PermitRecord::new(
                "Electrical Permit",
                "$65.00",
                "3-4 business days",
                &["Electrical Application E-400"],
            ),
        ],
        total_cost: "$350.00".to_string(),
        total_time: "7-10 business days".to_string(),
        inspections: vec![
            "Rough Plumbing".to_string(),
            "Rough Electrical".to_string(),
            "Final".to_string(),
        ],
        related_codes: vec![
            CodeReference::new(
                "Plumbing Fixture Clearances",
                "IPC Section 405",
                "Minimum clearances required around toilets, sinks, and showers for \
                 accessibility and functionality.",
            ),
            CodeReference::new(
                "Ventilation Requirements",
                "IRC Section M1507",
                "Exhaust fan requirements for bathrooms including minimum CFM ratings and \
                 duct specifications.",
            ),
            CodeReference::new(
                "GFCI Protection",
                "NEC Section 210.8",
                "All bathroom receptacles must be GFCI protected within 6 feet of water \
                 sources.",
            ),
            CodeReference::new(
                "Water-Resistant Materials",
                "IBC Section R702.4",
                "Requirements for water-resistant drywall and backing materials in wet \
                 areas.",
            ),
            CodeReference::new(
                "Drain and Trap Requirements",
                "IPC Section 1002",
                "Proper P-trap installation and drain sizing for bathroom fixtures.",
            ),
        ],
    }
}

fn fence() -> ProjectFixture {
    ProjectFixture {
        id: "fence".to_string(),
        label: "Install Fence".to_string(),
        icon: "🏗️".to_string(),
        description: "6ft privacy fence".to_string(),
        permits: vec![PermitRecord::new(
            "Zoning Permit - Fence Installation",
            "$75.00",
            "2-3 business days",
            &["Fence Permit Application F-500"],
        )],
        total_cost: "$75.00".to_string(),
        total_time: "2-3 business days".to_string(),
        inspections: vec!["Final".to_string()],
        related_codes: vec![
            CodeReference::new(
                "Fence Height Limitations",
                "Zoning Code 15.24.040",
                "Maximum fence heights: 6 feet for rear/side yards, 4 feet for front yards \
                 in residential zones.",
            ),
            CodeReference::new(
                "Setback Requirements",
                "Zoning Code 15.24.045",
                "Fences must be set back minimum 2 feet from property lines unless on \
                 boundary with neighbor agreement.",
            ),
            CodeReference::new(
                "Corner Lot Visibility",
                "Zoning Code 15.24.050",
                "Height restrictions near intersections to maintain sight distance \
                 triangles for traffic safety.",
            ),
            CodeReference::new(
                "Pool Enclosure Standards",
                "IBC Section AG105",
                "If enclosing a pool, fences must be minimum 4 feet high with self-closing, \
                 self-latching gates.",
            ),
        ],
    }
}

fn solar() -> ProjectFixture {
    ProjectFixture {
        id: "solar".to_string(),
        label: "Solar Panels".to_string(),
        icon: "☀️".to_string(),
        description: "Rooftop installation".to_string(),
        permits: vec![
            PermitRecord::new(
                "Building Permit - Solar Installation",
                "$250.00",
                "7-10 business days",
                &["Solar Application S-600"],
            ),
            PermitRecord::new(
                "Electrical Permit - Solar PV System",
                "$150.00",
                "5-7 business days",
                &["Solar Electrical Form SE-601"],
            ),
            PermitRecord::new(
                "Structural Review",
                "$100.00",
                "5-7 business days",
                &["Structural Assessment SR-602"],
            ),
        ],
        total_cost: "$500.00".to_string(),
        total_time: "10-14 business days".to_string(),
        inspections: vec![
            "Structural".to_string(),
            "Electrical Rough-in".to_string(),
            "Final Electrical".to_string(),
            "Final Building".to_string(),
        ],
        related_codes: vec![
            CodeReference::new(
                "Roof Load Capacity",
                "IBC Section 1607",
                "Structural analysis required to ensure roof can support additional dead \
                 load of solar panel system.",
            ),
            CodeReference::new(
                "Fire Setback Requirements",
                "IFC Section 605.11",
                "Solar panels must maintain 36\" pathways for firefighter access on \
                 residential roofs.",
            ),
            CodeReference::new(
                "Electrical Disconnects",
                "NEC Article 690",
                "Required disconnect switches, grounding, and overcurrent protection for \
                 PV systems.",
            ),
            CodeReference::new(
                "Rapid Shutdown Systems",
                "NEC Section 690.12",
                "Solar systems must have rapid shutdown capability to de-energize \
                 conductors during emergencies.",
            ),
            CodeReference::new(
                "Wind and Seismic Loads",
                "IBC Section 1609",
                "Panel mounting systems must be engineered for local wind speeds and \
                 seismic activity.",
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_returns_matching_id() {
        let catalog = ProjectCatalog::builtin();
        for id in ["deck", "bathroom", "fence", "solar"] {
            let fixture = catalog.get(id).expect("builtin id should resolve");
            assert_eq!(fixture.id, id);
        }
    }

    #[test]
    fn test_lookup_unknown_id() {
        let catalog = ProjectCatalog::builtin();
        assert!(catalog.get("garage").is_none());
        assert!(catalog.get("").is_none());
        assert!(!catalog.contains("DECK"));
    }

    #[test]
    fn test_resolve_unknown_id_reports_input() {
        let err = ProjectCatalog::builtin().resolve("pool").unwrap_err();
        assert_eq!(err, UnknownProjectType("pool".to_string()));
        assert!(err.to_string().contains("'pool'"));
    }

    #[test]
    fn test_catalog_has_four_projects() {
        let catalog = ProjectCatalog::builtin();
        assert_eq!(catalog.len(), 4);
        assert!(!catalog.is_empty());
        let ids: Vec<_> = catalog.ids().collect();
        assert_eq!(ids, vec!["deck", "bathroom", "fence", "solar"]);
    }

    #[test]
    fn test_fence_related_codes() {
        let codes = ProjectCatalog::builtin().related_codes("fence");
        assert_eq!(codes.len(), 4);
        for code in codes {
            assert!(!code.title.is_empty());
            assert!(!code.code_citation.is_empty());
            assert!(!code.description.is_empty());
        }
    }

    #[test]
    fn test_related_codes_unknown_id_is_empty() {
        assert!(ProjectCatalog::builtin().related_codes("unknown").is_empty());
    }

    #[test]
    fn test_deck_fixture_contents() {
        let deck = ProjectCatalog::builtin().get("deck").unwrap();
        assert_eq!(deck.permits.len(), 2);
        assert_eq!(deck.total_cost, "$175.00");
        assert_eq!(deck.total_time, "5-8 business days");
        assert_eq!(deck.inspections, vec!["Foundation", "Framing", "Final"]);
        assert_eq!(deck.permits[0].forms[0], "Application Form A-101");
        assert!(deck.permits.iter().all(|p| p.required));
    }

    #[test]
    fn test_form_names_ordered_across_permits() {
        let deck = ProjectCatalog::builtin().get("deck").unwrap();
        assert_eq!(
            deck.form_names(),
            vec!["Application Form A-101", "Site Plan Worksheet", "Zoning Checklist Z-200"]
        );
    }

    #[test]
    fn test_fixture_serializes_to_json() {
        let fence = ProjectCatalog::builtin().get("fence").unwrap();
        let json = serde_json::to_value(fence).unwrap();
        assert_eq!(json["id"], "fence");
        assert_eq!(json["permits"][0]["fee"], "$75.00");
        assert_eq!(json["related_codes"].as_array().unwrap().len(), 4);
    }
}
