//! Controlled vocabularies for BORME section A parsing.
//!
//! All tables are process-wide immutable configuration: the act vocabulary,
//! legal-form tokens, normalization suffix lists, the officer-label stoplist,
//! the section-heading to action-type map, and the province tables. Adding a
//! new act or role section is a data change here, not a logic change.

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

use crate::models::record::ActionType;

/// Administrative acts detected in entry bodies, in vocabulary order.
/// "Constitución" is special-cased by the extractor and always listed first.
pub const ACTS: &[&str] = &[
    // Constitución y extinción
    "Constitución",
    "Disolución",
    "Extinción",
    // Cargos
    "Ceses/Dimisiones",
    "Nombramientos",
    "Revocaciones",
    "Reelecciones",
    "Cancelaciones de oficio de nombramientos",
    "Nombramiento de administradores",
    // Modificaciones
    "Modificaciones estatutarias",
    "Cambio de domicilio social",
    "Cambio de objeto social",
    "Cambio de denominación social",
    "Ampliación del objeto social",
    "Ampliacion del objeto social",
    "Ampliación de capital",
    "Reducción de capital",
    // Operaciones societarias
    "Fusión por absorción",
    "Fusión",
    "Escisión",
    "Transformación de sociedad",
    "Transformación",
    // Concursal
    "Situación concursal",
    "Auto de declaración de concurso",
    "Auto de apertura de la fase de liquidación",
    "Auto de conclusión del concurso",
    "Revocación de administradores concursales",
    "Crédito incobrable",
    // Hoja registral
    "Cierre provisional hoja registral",
    "Reapertura hoja registral",
    // Unipersonalidad
    "Declaración de unipersonalidad",
    "Pérdida del carácter de unipersonalidad",
    "Pérdida del caracter de unipersonalidad",
    // Otros
    "Otros conceptos",
    "Fe de erratas",
    "Depósito de cuentas anuales",
    "Empresario Individual",
    "Sociedad unipersonal",
];

/// Legal-form words that can appear capitalized inside a company name that is
/// otherwise all caps. The boundary detector must not cut at these.
pub const LEGAL_FORM_TOKENS: &[&str] = &[
    "Sociedad",
    "Limitada",
    "Anónima",
    "Anonima",
    "Cooperativa",
    "Profesional",
    "Laboral",
    "Deportiva",
    "Unipersonal",
    "Civil",
    "Comanditaria",
    "Colectiva",
    "Comandita",
    "Agrupación",
    "Agrupacion",
    "Europea",
    "Responsabilidad",
    "Sucursal",
    "Nueva",
    "Empresa",
];

/// Trailing legal-form suffixes stripped by the lightweight (extraction-time)
/// normalizer. Single pass, first match wins.
pub const LIGHT_SUFFIXES: &[&str] = &[
    " SOCIEDAD ANONIMA DEPORTIVA",
    " SOCIEDAD ANONIMA",
    " SOCIEDAD LIMITADA PROFESIONAL",
    " SOCIEDAD LIMITADA LABORAL",
    " SOCIEDAD LIMITADA NUEVA EMPRESA",
    " SOCIEDAD LIMITADA",
    " SOCIEDAD COOPERATIVA ANDALUZA",
    " SOCIEDAD COOPERATIVA",
    " SOCIEDAD CIVIL PROFESIONAL",
    " SOCIEDAD CIVIL",
    " AGRUPACION DE INTERES ECONOMICO",
    " SAU",
    " SLU",
    " SAD",
    " SLL",
    " SLP",
    " SLNE",
    " SA SME",
    " SA",
    " SL",
    " SC",
    " SCA",
    " SCCL",
    " SCOOP",
    " SE",
    " SRL",
    " AIE",
];

/// Trailing legal-form suffixes stripped by the full (matching-time)
/// normalizer. Applied in a loop until none matches (fixed point).
pub const FULL_SUFFIXES: &[&str] = &[
    " SOCIEDAD ANONIMA DEPORTIVA",
    " SOCIEDAD ANONIMA",
    " SOCIEDAD LIMITADA PROFESIONAL",
    " SOCIEDAD LIMITADA LABORAL",
    " SOCIEDAD LIMITADA NUEVA EMPRESA",
    " SOCIEDAD LIMITADA",
    " SOCIEDAD COOPERATIVA ANDALUZA",
    " SOCIEDAD COOPERATIVA",
    " SOCIEDAD CIVIL PROFESIONAL",
    " SOCIEDAD CIVIL",
    " SOCIEDAD UNIPERSONAL",
    " AGRUPACION DE INTERES ECONOMICO",
    " SAU",
    " SLU",
    " SAD",
    " SLL",
    " SLP",
    " SLNE",
    " SA SME",
    " SAE",
    " SME",
    " SA",
    " SL",
    " SC",
    " SCA",
    " SCCL",
    " SCOOP",
    " SE",
    " SRL",
    " AIE",
];

/// Non-role field labels that the officer pattern also matches.
pub const OFFICER_LABEL_STOPLIST: &[&str] = &[
    // Field labels
    "Objeto social",
    "Domicilio",
    "Capital",
    "Datos registrales",
    "ACTIVIDAD PRINCIPAL",
    "Comienzo de operaciones",
    "Artículo de los estatutos",
    "ARTICULO",
    // Section names that match the role pattern but are not roles
    "Otros conceptos",
    "Sociedades absorbidas",
    "Resoluciones",
    "Denominación y forma adoptada",
];

/// Officer-section heading prefixes and the action type each one implies.
pub const SECTION_ACTIONS: &[(&str, ActionType)] = &[
    ("Nombramientos", ActionType::Appointment),
    ("Ceses/Dimisiones", ActionType::Resignation),
    ("Revocaciones", ActionType::Revocation),
    ("Reelecciones", ActionType::Reelection),
    (
        "Cancelaciones de oficio de nombramientos",
        ActionType::Cancellation,
    ),
];

/// Section-header labels dropped whole by the text cleaner.
pub const NOISE_LINES: &[&str] = &[
    "SECCIÓN PRIMERA",
    "Empresarios",
    "Actos inscritos",
    "SECCIÓN SEGUNDA",
    "Anuncios y avisos legales",
    "Otros actos publicados en el Registro Mercantil",
];

/// Province names as printed in region sub-headers, including the variant
/// spellings that appear across publication years.
pub const PROVINCES: &[&str] = &[
    "ALBACETE",
    "ALICANTE",
    "ALICANTE/ALACANT",
    "ALMERIA",
    "ALMERÍA",
    "ARABA/ÁLAVA",
    "ASTURIAS",
    "AVILA",
    "ÁVILA",
    "BADAJOZ",
    "BARCELONA",
    "BIZKAIA",
    "BURGOS",
    "CACERES",
    "CÁCERES",
    "CADIZ",
    "CÁDIZ",
    "CANTABRIA",
    "CASTELLON",
    "CASTELLÓN",
    "CASTELLÓN/CASTELLÓ",
    "CIUDAD REAL",
    "CORDOBA",
    "CÓRDOBA",
    "A CORUÑA",
    "CUENCA",
    "GIPUZKOA",
    "GIRONA",
    "GRANADA",
    "GUADALAJARA",
    "HUELVA",
    "HUESCA",
    "ILLES BALEARS",
    "JAEN",
    "JAÉN",
    "LEON",
    "LEÓN",
    "LLEIDA",
    "LUGO",
    "MADRID",
    "MALAGA",
    "MÁLAGA",
    "MELILLA",
    "MURCIA",
    "NAVARRA",
    "OURENSE",
    "PALENCIA",
    "LAS PALMAS",
    "PONTEVEDRA",
    "LA RIOJA",
    "SALAMANCA",
    "SEGOVIA",
    "SEVILLA",
    "SORIA",
    "TARRAGONA",
    "SANTA CRUZ DE TENERIFE",
    "TERUEL",
    "TOLEDO",
    "VALENCIA",
    "VALENCIA/VALÈNCIA",
    "VALLADOLID",
    "ZAMORA",
    "ZARAGOZA",
    "CEUTA",
];

/// Filename province codes to canonical province names.
pub const PROVINCE_CODES: &[(&str, &str)] = &[
    ("01", "ARABA/ÁLAVA"),
    ("02", "ALBACETE"),
    ("03", "ALICANTE"),
    ("04", "ALMERÍA"),
    ("05", "ÁVILA"),
    ("06", "BADAJOZ"),
    ("07", "ILLES BALEARS"),
    ("08", "BARCELONA"),
    ("09", "BURGOS"),
    ("10", "CÁCERES"),
    ("11", "CÁDIZ"),
    ("12", "CASTELLÓN"),
    ("13", "CIUDAD REAL"),
    ("14", "CÓRDOBA"),
    ("15", "A CORUÑA"),
    ("16", "CUENCA"),
    ("17", "GIRONA"),
    ("18", "GRANADA"),
    ("19", "GUADALAJARA"),
    ("20", "GIPUZKOA"),
    ("21", "HUELVA"),
    ("22", "HUESCA"),
    ("23", "JAÉN"),
    ("24", "LEÓN"),
    ("25", "LLEIDA"),
    ("26", "LA RIOJA"),
    ("27", "LUGO"),
    ("28", "MADRID"),
    ("29", "MÁLAGA"),
    ("30", "MURCIA"),
    ("31", "NAVARRA"),
    ("32", "OURENSE"),
    ("33", "ASTURIAS"),
    ("34", "PALENCIA"),
    ("35", "LAS PALMAS"),
    ("36", "PONTEVEDRA"),
    ("37", "SALAMANCA"),
    ("38", "SANTA CRUZ DE TENERIFE"),
    ("39", "CANTABRIA"),
    ("40", "SEGOVIA"),
    ("41", "SEVILLA"),
    ("42", "SORIA"),
    ("43", "TARRAGONA"),
    ("44", "TERUEL"),
    ("45", "TOLEDO"),
    ("46", "VALENCIA"),
    ("47", "VALLADOLID"),
    ("48", "BIZKAIA"),
    ("49", "ZAMORA"),
    ("50", "ZARAGOZA"),
    ("51", "CEUTA"),
    ("52", "MELILLA"),
    ("99", "REGISTROS MERCANTILES CENTRALES"),
];

lazy_static! {
    /// Legal-form tokens as a set, for boundary-candidate rejection.
    pub static ref LEGAL_FORM_SET: HashSet<&'static str> =
        LEGAL_FORM_TOKENS.iter().copied().collect();

    /// Officer-label stoplist as a set.
    pub static ref OFFICER_STOPLIST_SET: HashSet<&'static str> =
        OFFICER_LABEL_STOPLIST.iter().copied().collect();

    /// Province-name set recognized by the jurisdiction tracker.
    pub static ref PROVINCE_SET: HashSet<&'static str> =
        PROVINCES.iter().copied().collect();

    /// Province code lookup.
    pub static ref PROVINCE_BY_CODE: HashMap<&'static str, &'static str> =
        PROVINCE_CODES.iter().copied().collect();

    /// Cleaner skip-line set.
    pub static ref NOISE_LINE_SET: HashSet<&'static str> =
        NOISE_LINES.iter().copied().collect();
}

/// Resolve a filename province code to its canonical name, empty if unknown.
pub fn province_name(code: &str) -> &'static str {
    PROVINCE_BY_CODE.get(code).copied().unwrap_or("")
}
