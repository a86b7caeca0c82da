//! Static code→category maps for feature derivation.
//!
//! String-coded elements (HES) map NHS Data Dictionary codes to
//! analytic groupings; SNOMED-coded elements (ECDS) map concept IDs.
//! Codes recoded to `None` are administrative noise the study treats
//! as missing. The reserved `Unmapped` category flags codes outside
//! both the map and the loaded reference set.

/// Reserved category for codes covered by neither the map nor the
/// authoritative reference set.
pub const UNMAPPED: &str = "Unmapped";

pub const GENDER: &[(&str, &str)] = &[
    ("1", "Male"),
    ("2", "Female"),
    ("9", "Indeterminate"),
    ("X", "Not Known"),
    // old gender code, current NHS DD definition
    ("0", "Not Known"),
];

pub const ETHNOS: &[(&str, &str)] = &[
    ("A", "White"),
    ("B", "White"),
    ("C", "White"),
    ("D", "Mixed"),
    ("E", "Mixed"),
    ("F", "Mixed"),
    ("G", "Mixed"),
    ("H", "Asian or Asian British"),
    ("J", "Asian or Asian British"),
    ("K", "Asian or Asian British"),
    ("L", "Asian or Asian British"),
    ("M", "Black or Black British"),
    ("N", "Black or Black British"),
    ("P", "Black or Black British"),
    ("R", "Other Ethnic Groups"),
    ("S", "Other Ethnic Groups"),
    ("Z", "Not stated"),
    ("99", "Not known"),
];

pub const ADMISORC: &[(&str, &str)] = &[
    ("19", "Residence"),
    ("29", "Residence"),
    ("39", "Penal"),
    ("49", "Medical care"),
    ("51", "Medical care"),
    ("52", "Medical care"),
    ("53", "Medical care"),
    ("54", "Care Home"),
    ("65", "Care Home"),
    ("66", "Residence"),
    ("79", "Residence"),
    ("85", "Care Home"),
    ("86", "Care Home"),
    ("87", "Medical care"),
    ("88", "Care Home"),
    ("98", "Unknown"),
    ("99", "Unknown"),
];

pub const DISDEST: &[(&str, &str)] = &[
    ("19", "Residence"),
    ("29", "Residence"),
    ("30", "Medical care"),
    ("37", "Penal"),
    ("38", "Penal"),
    ("39", "Penal"),
    ("48", "Medical care"),
    ("49", "Medical care"),
    ("50", "Medical care"),
    ("51", "Medical care"),
    ("52", "Medical care"),
    ("53", "Medical care"),
    ("54", "Care Home"),
    ("65", "Care Home"),
    ("66", "Residence"),
    ("79", "Died"),
    ("84", "Medical care"),
    ("85", "Care Home"),
    ("87", "Medical care"),
    ("88", "Care Home"),
    ("98", "Unknown"),
    ("99", "Unknown"),
];

pub const DISMETH: &[(&str, &str)] = &[
    ("1", "Discharged"),
    ("2", "Discharged"),
    ("3", "Discharged"),
    ("4", "Died"),
    ("5", "Died"),
    ("8", "Not Applicable"),
    ("9", "Unknown"),
];

/// First admitted diagnosis, 4-character ICD-10 codes checked before
/// the 3-character prefix.
pub const SEASONAL_ICD10_4CHAR: &[(&str, &str)] = &[
    ("U071", "Respiratory infection"),
    ("U072", "Respiratory infection"),
];

pub const SEASONAL_ICD10_3CHAR: &[(&str, &str)] = &[
    ("J00", "Respiratory infection"),
    ("J01", "Respiratory infection"),
    ("J02", "Respiratory infection"),
    ("J03", "Respiratory infection"),
    ("J04", "Respiratory infection"),
    ("J05", "Respiratory infection"),
    ("J06", "Respiratory infection"),
    ("J09", "Respiratory infection"),
    ("J10", "Respiratory infection"),
    ("J11", "Respiratory infection"),
    ("J12", "Respiratory infection"),
    ("J13", "Respiratory infection"),
    ("J14", "Respiratory infection"),
    ("J15", "Respiratory infection"),
    ("J16", "Respiratory infection"),
    ("J17", "Respiratory infection"),
    ("J18", "Respiratory infection"),
    ("J20", "Respiratory infection"),
    ("J21", "Respiratory infection"),
    ("J22", "Respiratory infection"),
    ("J40", "Chronic disease exacerbation"),
    ("J41", "Chronic disease exacerbation"),
    ("J42", "Chronic disease exacerbation"),
    ("J43", "Chronic disease exacerbation"),
    ("J44", "Chronic disease exacerbation"),
    ("J45", "Chronic disease exacerbation"),
    ("J46", "Chronic disease exacerbation"),
    ("J47", "Chronic disease exacerbation"),
    ("U10", "Respiratory infection"),
];

pub const ACCOMMODATIONSTATUS: &[(i64, &str)] = &[
    (1064831000000106, "Unknown"),
    (1064841000000102, "Unknown"),
    (1066881000000100, "Unknown"),
    (160734000, "Yes"),
    (224221006, "No"),
    (224225002, "No"),
    (224231004, "No"),
    (32911000, "No"),
    (394923006, "No"),
    (414418009, "No"),
];

pub const EDARRIVALMODE: &[(i64, &str)] = &[
    (1048061000000105, "Walk-In"),
    (1048071000000103, "Walk-In"),
    (2018310000, "Ambulance"),
    (2018350000, "Ambulance"),
    (2018370000, "Ambulance"),
    (2018510000, "Ambulance"),
    (2018550000, "Other"),
    (2018810000, "Other"),
    (2018910000, "Other"),
];

pub const EDATTENDSOURCE: &[(i64, &str)] = &[
    (1052681000000105, "Community"),
    (1065391000000104, "Personal"),
    (1065401000000101, "Community"),
    (1065991000000100, "Community"),
    (1066001000000101, "Community"),
    (1066011000000104, "Community"),
    (1066021000000105, "Emergency Services"),
    (1066031000000107, "Emergency Services"),
    (1066041000000103, "Emergency Services"),
    (1066051000000100, "Emergency Services"),
    (1066061000000102, "Emergency Services"),
    (1066431000000102, "Hospital"),
    (1066441000000106, "Hospital"),
    (1077191000000103, "Community"),
    (1077201000000101, "Community"),
    (1077211000000104, "Community"),
    (1077761000000105, "Community"),
    (1079521000000104, "Hospital"),
    (166941000000106, "Primary Care"),
    (185363009, "Community"),
    (185366001, "Community"),
    (185368000, "Community"),
    (185369008, "Community"),
    (198261000000104, "Emergency Services"),
    (276491000, "Primary Care"),
    (315261000000101, "Personal"),
    (507291000000100, "Personal"),
    (835091000000109, "Hospital"),
    (835101000000101, "Hospital"),
    (877171000000103, "Community"),
    (879591000000102, "Primary Care"),
    (889801000000100, "Emergency Services"),
];

pub const EDACUITY: &[(i64, &str)] = &[
    (1064891000000107, "1 - Immediate care level emergency care"),
    (1064901000000108, "3 - Urgent level emergency care"),
    (1064911000000105, "2 - Very urgent level emergency care"),
    (1077241000000103, "4 - Standard level emergency care"),
    (1077251000000100, "5 - Low acuity level emergency care"),
];

pub const EDATTENDDISPATCH: &[(i64, &str)] = &[
    (1066331000000109, "Ambulatory / Short Stay"),
    (1066341000000100, "Ambulatory / Short Stay"),
    (1066351000000102, "Ambulatory / Short Stay"),
    (1066361000000104, "Admitted"),
    (1066371000000106, "Admitted"),
    (1066381000000108, "Admitted"),
    (1066391000000105, "Admitted"),
    (1066401000000108, "Admitted"),
    (183919006, "Transfer"),
    (19712007, "Transfer"),
    (305398007, "Died"),
    (306689006, "Discharged"),
    (306691003, "Discharged"),
    (306694006, "Discharged"),
    (306705005, "Discharged"),
    (306706006, "Admitted"),
    (50861005, "Discharged"),
];

pub const EDREFSERVICE: &[(i64, &str)] = &[
    (1064851000000104, "Medical"),
    (183516009, "Medical"),
    (183518005, "Medical"),
    (183519002, "Medical"),
    (183521007, "Medical"),
    (183522000, "Medical"),
    (183523005, "Medical"),
    (183524004, "Psychiatric"),
    (183542009, "Surgical"),
    (183543004, "Surgical"),
    (183544005, "Surgical"),
    (183545006, "Surgical"),
    (183546007, "Surgical"),
    (183548008, "ObGyn"),
    (183549000, "ObGyn"),
    (183561008, "Local Medical"),
    (202291000000107, "Psychiatric"),
    (247541000000106, "Community / OPD"),
    (276490004, "Local Medical"),
    (306107006, "Critical Care"),
    (306111000, "Medical"),
    (306114008, "Medical"),
    (306118006, "Medical"),
    (306123006, "Medical"),
    (306124000, "Medical"),
    (306125004, "Medical"),
    (306127007, "Medical"),
    (306129005, "Community / OPD"),
    (306136006, "Psychiatric"),
    (306138007, "Psychiatric"),
    (306140002, "Medical"),
    (306148009, "Medical"),
    (306152009, "Local Medical"),
    (306182003, "Surgical"),
    (306184002, "Surgical"),
    (306198005, "Surgical"),
    (306200004, "Surgical"),
    (306201000, "Surgical"),
    (306237005, "Medical"),
    (306285006, "Medical"),
    (306802002, "Medical"),
    (306934005, "Surgical"),
    (307374004, "Medical"),
    (307375003, "Community / OPD"),
    (307376002, "Community / OPD"),
    (307380007, "Community / OPD"),
    (327121000000104, "Surgical"),
    (353961000000104, "Community / OPD"),
    (380241000000107, "Psychiatric"),
    (382271000000102, "Critical Care"),
    (384711009, "Surgical"),
    (384712002, "Surgical"),
    (38670004, "Community / OPD"),
    (413127007, "Psychiatric"),
    (415263003, "Community / OPD"),
    (4266003, "Community / OPD"),
    (516511000000107, "Community / OPD"),
    (61801003, "Community / OPD"),
    (770411000000102, "Local Medical"),
    (770677000, "Critical Care"),
    (78429003, "Community / OPD"),
    (785621000000108, "Community / OPD"),
    (785681000000109, "Community / OPD"),
    (785701000000106, "Community / OPD"),
    (785721000000102, "Community / OPD"),
    (785761000000105, "Community / OPD"),
    (785781000000101, "Community / OPD"),
    (811391000000104, "Community / OPD"),
    (818861000000107, "Community / OPD"),
    (823961000000102, "Community / OPD"),
    (894171000000100, "Community / OPD"),
    (898791000000105, "Medical"),
    (975951000000109, "Critical Care"),
];

/// First emergency diagnosis, seasonal conditions only; everything
/// else recodes to missing.
pub const EDDIAG_SEASONAL: &[(i64, &str)] = &[
    (12295008, "Chronic disease exacerbation"),
    (1325161000000102, "Respiratory infection"),
    (1325171000000109, "Respiratory infection"),
    (1325181000000106, "Respiratory infection"),
    (13645005, "Chronic disease exacerbation"),
    (195951007, "Chronic disease exacerbation"),
    (195967001, "Chronic disease exacerbation"),
    (205237003, "Respiratory infection"),
    (233604007, "Respiratory infection"),
    (278516003, "Respiratory infection"),
    (36971009, "Respiratory infection"),
    (50417007, "Respiratory infection"),
    (54150009, "Respiratory infection"),
    (6142004, "Respiratory infection"),
    (62994001, "Respiratory infection"),
    (80384002, "Respiratory infection"),
    (90176007, "Respiratory infection"),
];

/// Investigations the study does not count as urgent; all other
/// non-noise investigation codes recode to Urgent.
pub const EDINVEST_NON_URGENT: &[i64] = &[167252002, 27171005, 53115007, 67900009];

/// Investigation codes treated as not-performed noise.
pub const EDINVEST_NOISE: &[i64] = &[1088291000000101];

pub const EDTREAT_NON_URGENT: &[i64] = &[266712008, 413334001, 81733005];

pub const EDTREAT_NOISE: &[i64] = &[183964008];

pub fn lookup_str(
    map: &'static [(&'static str, &'static str)],
    code: &str,
) -> Option<&'static str> {
    map.iter()
        .find(|(key, _)| *key == code)
        .map(|(_, label)| *label)
}

pub fn lookup_snomed(map: &'static [(i64, &'static str)], code: i64) -> Option<&'static str> {
    map.iter()
        .find(|(key, _)| *key == code)
        .map(|(_, label)| *label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_lookup_hits_and_misses() {
        assert_eq!(lookup_str(GENDER, "1"), Some("Male"));
        assert_eq!(lookup_str(GENDER, "0"), Some("Not Known"));
        assert_eq!(lookup_str(GENDER, "7"), None);
    }

    #[test]
    fn snomed_lookup_hits_and_misses() {
        assert_eq!(lookup_snomed(EDACUITY, 1064891000000107), Some("1 - Immediate care level emergency care"));
        assert_eq!(lookup_snomed(EDACUITY, 42), None);
    }
}
