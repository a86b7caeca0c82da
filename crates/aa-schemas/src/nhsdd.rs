//! NHS Data Dictionary code sets.
//!
//! Code/description pairs for the coded data elements used by the
//! episode schemas, each carrying the dictionary URL it was sourced
//! from. The upstream dictionary is the authoritative reference; these
//! tables are a point-in-time transcription.

/// A coded data element: its dictionary reference plus the valid
/// code/description pairs.
#[derive(Debug, Clone, Copy)]
pub struct CodeSet {
    pub element: &'static str,
    pub url: &'static str,
    pub codes: &'static [(&'static str, &'static str)],
}

impl CodeSet {
    /// The valid codes, for building `IsIn` constraints.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.codes.iter().map(|(code, _)| *code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|(key, _)| *key == code)
    }

    pub fn description(&self, code: &str) -> Option<&'static str> {
        self.codes
            .iter()
            .find(|(key, _)| *key == code)
            .map(|(_, description)| *description)
    }
}

pub const GENDER: CodeSet = CodeSet {
    element: "person_gender_code_current",
    url: "https://www.datadictionary.nhs.uk/data_elements/person_gender_code_current.html",
    codes: &[
        ("1", "Male"),
        ("2", "Female"),
        ("9", "Indeterminate (unable to be classified as either male or female)"),
        ("X", "Not Known (PERSON STATED GENDER CODE not recorded)"),
        // Old gender code retained by some providers.
        ("0", "Not Known"),
    ],
};

pub const ETHNOS: CodeSet = CodeSet {
    element: "ethnic_category",
    url: "https://www.datadictionary.nhs.uk/data_elements/ethnic_category.html",
    codes: &[
        ("A", "British (White)"),
        ("B", "Irish (White)"),
        ("C", "Any other White background"),
        ("D", "White and Black Caribbean (Mixed)"),
        ("E", "White and Black African (Mixed)"),
        ("F", "White and Asian (Mixed)"),
        ("G", "Any other Mixed background"),
        ("H", "Indian (Asian or Asian British)"),
        ("J", "Pakistani (Asian or Asian British)"),
        ("K", "Bangladeshi (Asian or Asian British)"),
        ("L", "Any other Asian background"),
        ("M", "Caribbean (Black or Black British)"),
        ("N", "African (Black or Black British)"),
        ("P", "Any other Black background"),
        ("R", "Chinese (other ethnic group)"),
        ("S", "Any other ethnic group"),
        ("Z", "Not stated"),
        ("99", "Not known"),
    ],
};

pub const ADMIMETH: CodeSet = CodeSet {
    element: "admission_method_code__hospital_provider_spell_",
    url: "https://www.datadictionary.nhs.uk/data_elements/admission_method_code__hospital_provider_spell_.html",
    codes: &[
        ("11", "Elective: from waiting list"),
        ("12", "Elective: booked"),
        ("13", "Elective: planned"),
        ("21", "Emergency: Emergency Care Department of the Health Care Provider"),
        ("22", "Emergency: General Practitioner"),
        ("23", "Emergency: Bed Bureau"),
        ("24", "Emergency: Consultant Clinic of the Health Care Provider"),
        ("25", "Emergency: admission via Mental Health Crisis Resolution Team"),
        ("2A", "Emergency: Emergency Care Department of another provider"),
        ("2B", "Emergency: transfer of an admitted patient from another Hospital Provider"),
        ("2C", "Emergency: baby born at home as intended"),
        ("2D", "Emergency: other emergency admission"),
        ("28", "Emergency: other means"),
        ("31", "Maternity: admitted ante partum"),
        ("32", "Maternity: admitted post partum"),
        ("82", "Other: the birth of a baby in this Health Care Provider"),
        ("83", "Other: baby born outside the Health Care Provider except when born at home as intended"),
        ("81", "Other: transfer of any admitted patient from another Hospital Provider"),
        ("98", "Not applicable"),
        ("99", "Not known"),
    ],
};

pub const ADMISORC: CodeSet = CodeSet {
    element: "admission_source__hospital_provider_spell_",
    url: "https://www.datadictionary.nhs.uk/data_elements/admission_source__hospital_provider_spell_.html",
    codes: &[
        ("19", "The usual place of residence"),
        ("29", "Temporary place of residence when usually resident elsewhere"),
        ("37", "Court"),
        ("38", "Police station / Police custody suite"),
        ("39", "Penal establishment"),
        ("40", "High Security Psychiatric Hospital, Scotland"),
        ("41", "High Security Psychiatric Hospital, England"),
        ("42", "New admission to a High Security Psychiatric Hospital"),
        ("49", "NHS other Hospital Provider: high security psychiatric accommodation"),
        ("51", "NHS other Hospital Provider: ward for general patients or the younger physically disabled"),
        ("52", "NHS other Hospital Provider: ward for maternity patients or neonates"),
        ("53", "NHS other Hospital Provider: ward for patients who are mentally ill or have learning disabilities"),
        ("54", "NHS run Care Home"),
        ("55", "Care Home (local authority managed)"),
        ("56", "Care Home (voluntary or private)"),
        ("65", "Local Authority residential accommodation"),
        ("66", "Local Authority foster care"),
        ("79", "Babies born in or on the way to hospital"),
        ("85", "Non-NHS run Care Home"),
        ("86", "Non-NHS run Care Home (with nursing)"),
        ("87", "Non-NHS run hospital"),
        ("88", "Non-NHS run hospice"),
        ("98", "Not applicable"),
        ("99", "Not known"),
    ],
};

pub const DISDEST: CodeSet = CodeSet {
    element: "discharge_destination_code__hospital_provider_spell_",
    url: "https://www.datadictionary.nhs.uk/data_elements/discharge_destination_code__hospital_provider_spell_.html",
    codes: &[
        ("19", "The usual place of residence"),
        ("29", "Temporary place of residence when usually resident elsewhere"),
        ("30", "Repatriation from high security psychiatric accommodation"),
        ("37", "Court"),
        ("38", "Police station / Police custody suite"),
        ("39", "Penal establishment"),
        ("48", "High security psychiatric accommodation in an NHS Hospital Provider"),
        ("49", "NHS other Hospital Provider: high security psychiatric accommodation"),
        ("50", "NHS other Hospital Provider: medium secure unit"),
        ("51", "NHS other Hospital Provider: ward for general patients or the younger physically disabled"),
        ("52", "NHS other Hospital Provider: ward for maternity patients or neonates"),
        ("53", "NHS other Hospital Provider: ward for patients who are mentally ill or have learning disabilities"),
        ("54", "NHS run Care Home"),
        ("65", "Local Authority residential accommodation"),
        ("66", "Local Authority foster care"),
        ("79", "Patient died or stillbirth"),
        ("84", "Non-NHS run hospital: medium secure unit"),
        ("85", "Non-NHS run Care Home"),
        ("87", "Non-NHS run hospital"),
        ("88", "Non-NHS run hospice"),
        ("98", "Not applicable"),
        ("99", "Not known"),
    ],
};

pub const DISMETH: CodeSet = CodeSet {
    element: "discharge_method_code__hospital_provider_spell_",
    url: "https://www.datadictionary.nhs.uk/data_elements/discharge_method_code__hospital_provider_spell_.html",
    codes: &[
        ("1", "Patient discharged on clinical advice or with clinical consent"),
        ("2", "Patient discharged him/herself or was discharged by a relative or advocate"),
        ("3", "Patient discharged by mental health review tribunal, Home Secretary or court"),
        ("4", "Patient died"),
        ("5", "Stillbirth"),
        ("8", "Not applicable (hospital provider spell not finished)"),
        ("9", "Not known"),
    ],
};

pub const EDATTENDCAT: CodeSet = CodeSet {
    element: "emergency_care_attendance_category",
    url: "https://www.datadictionary.nhs.uk/data_elements/emergency_care_attendance_category.html",
    codes: &[
        ("1", "Unplanned first Emergency Care Attendance for a new clinical condition"),
        ("2", "Unplanned follow-up attendance at the same Emergency Care Department"),
        ("3", "Unplanned follow-up attendance at a different Emergency Care Department"),
        ("4", "Planned follow-up Emergency Care Attendance"),
    ],
};

pub const EDDEPTTYPE: CodeSet = CodeSet {
    element: "emergency_care_department_type",
    url: "https://www.datadictionary.nhs.uk/data_elements/emergency_care_department_type.html",
    codes: &[
        ("01", "Emergency department: consultant led 24 hour service with full resuscitation facilities"),
        ("02", "Consultant led mono specialty accident and emergency service"),
        ("03", "Doctor or nurse led minor injury unit / urgent treatment centre"),
        ("04", "NHS walk in centre"),
        ("05", "Emergency care practitioner service outside of the services above"),
    ],
};
