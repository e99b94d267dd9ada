//! Archive Field Schema
//!
//! Read-only tables of the engine field names the handlers translate against:
//! tag fields, document-type fields, per-type date fields, the extended DisMax
//! query-field list and the per-type facet lists. Built once at startup and
//! injected into the handlers, so no handler reaches for global state.

/// Fields used by the tag lookup and autocomplete surfaces.
#[derive(Debug, Clone)]
pub struct TagFields {
    /// Asset identifier a tag document belongs to.
    pub asset_id: &'static str,
    /// Moderation status field.
    pub status: &'static str,
    /// Tag text, tokenized for prefix matching.
    pub content: &'static str,
    /// Untokenized copy of the tag text used for facet counting.
    pub content_facet: &'static str,
    /// Status value marking a tag as publicly visible.
    pub approved: &'static str,
}

/// Document-type and date fields used by the archive search surface.
#[derive(Debug, Clone)]
pub struct DocumentTypeFields {
    /// The indexed document-type field.
    pub doc_type: &'static str,
    /// Facet copy of the document-type field.
    pub doc_type_facet: &'static str,
    /// Flag restricting business records to web-publishable ones.
    pub web_publishable: &'static str,
    /// Single event date of a program.
    pub program_date: &'static str,
    /// Single event date of an audio recording.
    pub audio_date: &'static str,
    /// Single event date of a video recording.
    pub video_date: &'static str,
    /// Start of a business record's covered span.
    pub business_date_from: &'static str,
    /// End of a business record's covered span.
    pub business_date_to: &'static str,
    /// Start of a visual item's covered span.
    pub visual_date_from: &'static str,
    /// End of a visual item's covered span.
    pub visual_date_to: &'static str,
    /// Secondary sort key appended for part results.
    pub part_sort: &'static str,
}

/// Facet field lists added per selected document type.
#[derive(Debug, Clone)]
pub struct FacetFields {
    pub program: &'static [&'static str],
    pub printed_music: &'static [&'static str],
    pub part: &'static [&'static str],
    pub business_record: &'static [&'static str],
    pub visual: &'static [&'static str],
}

/// The complete read-only schema handed to every handler.
#[derive(Debug, Clone)]
pub struct ArchiveSchema {
    pub tags: TagFields,
    pub types: DocumentTypeFields,
    /// Every field the extended DisMax parser scores keyword queries against.
    pub query_fields: &'static [&'static str],
    pub facets: FacetFields,
}

impl ArchiveSchema {
    pub fn new() -> Self {
        Self {
            tags: TagFields {
                asset_id: "npt:assetId",
                status: "npt:status",
                content: "npt:content",
                content_facet: "npt:content_facet",
                approved: "Approved",
            },
            types: DocumentTypeFields {
                doc_type: "nyp:DocumentType",
                doc_type_facet: "nyp:DocumentType_facet",
                web_publishable: "nyp:WebPublishable",
                program_date: "npp:Date",
                audio_date: "npa:Date",
                video_date: "npx:Date",
                business_date_from: "npb:DateFrom",
                business_date_to: "npb:DateTo",
                visual_date_from: "npv:DateFrom",
                visual_date_to: "npv:DateTo",
                part_sort: "npm:PartID",
            },
            query_fields: QUERY_FIELDS,
            facets: FacetFields {
                program: &[
                    "npp:ConductorName_facet",
                    "npp:SoloistsNames_facet",
                    "npp:WorksComposerNames_facet",
                    "npp:LocationName_facet",
                    "npp:VenueName_facet",
                    "npp:EventTypeName_facet",
                    "npp:Season_facet",
                ],
                printed_music: &["npm:ScoreMarkingArtist_facet", "npm:ComposerName_facet"],
                part: &[
                    "npm:ComposerName_facet",
                    "npm:UsedByArtistName_facet",
                    "npm:PartMarkingArtist_facet",
                    "npm:PartTypeDesc_facet",
                ],
                business_record: &[
                    "npb:Names_facet",
                    "npb:Subject_facet",
                    "npb:RecordGroup_facet",
                    "npb:Series_facet",
                    "npb:SubSeries_facet",
                ],
                visual: &[
                    "npv:Photographer_facet",
                    "npv:CopyrightHolder_facet",
                    "npv:ImageType_facet",
                    "npv:PlaceOfImage_facet",
                    "npv:Event_facet",
                    "npv:PersonalNames_facet",
                    "npv:LocationName_facet",
                    "npv:VenueName_facet",
                ],
            },
        }
    }
}

impl Default for ArchiveSchema {
    fn default() -> Self {
        Self::new()
    }
}

/// The keyword-scoring field list, grouped by the document type that owns each field.
const QUERY_FIELDS: &[&str] = &[
    // base fields
    "nyp:DocumentType",
    "nyp:Notes",
    // program fields
    "npp:ProgramID",
    "npp:Season",
    "npp:OrchestraCode",
    "npp:OrchestraName",
    "npp:LocationName",
    "npp:VenueName",
    "npp:EventTypeName",
    "npp:SubEventName",
    "npp:ConductorName",
    "npp:SoloistsNames",
    "npp:SoloistsInstrumentName",
    "npp:WorksComposerNames",
    "npp:WorksTitle",
    "npp:WorksShortTitle",
    "npp:WorksConductorNames",
    // printed music fields
    "npm:LibraryID",
    "npm:ShortTitle",
    "npm:ComposerName",
    "npm:PublisherName",
    "npm:ComposerNameTitle",
    "npm:ScoreMarkingArtist",
    "npm:ScoreEditionTypeDesc",
    "npm:ScoreNotes",
    // part fields
    "npm:PartTypeDesc",
    "npm:PartMarkingArtist",
    "npm:UsedByArtistName",
    // business record fields
    "npb:BoxNumber",
    "npb:RecordGroup",
    "npb:Series",
    "npb:SubSeries",
    "npb:Folder",
    "npb:Names",
    "npb:Subject",
    "npb:Abstract",
    // visual fields
    "npv:ID",
    "npv:BoxNumber",
    "npv:PhilharmonicSource",
    "npv:OutsideSource",
    "npv:Photographer",
    "npv:CopyrightHolder",
    "npv:PlaceOfImage",
    "npv:PersonalNames",
    "npv:CorporateNames",
    "npv:Event",
    "npv:ImageType",
    "npv:LocationName",
    "npv:VenueName",
    // audio fields
    "npa:ProgramID",
    "npa:Location",
    "npa:EventTypeName",
    "npa:ConductorName",
    "npa:SoloistsAndInstruments",
    "npa:ComposerWork",
    "npa:OrchestraName",
    "npa:IntermissionFeature",
    "npa:LocationName",
    "npa:VenueName",
    "npa:SubEventName",
    "npa:URLLocation",
    "npa:IntermissionGuests",
    "npa:Announcer",
    // video fields
    "npx:ProgramID",
    "npx:Location",
    "npx:EventTypeName",
    "npx:ConductorName",
    "npx:SoloistsAndInstruments",
    "npx:ComposerNameWork",
    "npx:OrchestraName",
    "npx:IntermissionFeature",
    "npx:LocationName",
    "npx:VenueName",
    "npx:SubEventName",
    "npx:IntermissionGuests",
    "npx:Announcer",
    // tagged content
    "npt:tagged",
];
