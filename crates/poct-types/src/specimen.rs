//! Specimen (`SPC`) and its source and type code lists.

use chrono::{DateTime, Utc};

use crate::code_set::code_set;
use crate::{CodedElement, CodedValue};

code_set! {
    /// Body site a specimen was collected from (`SPC.source_cd`).
    pub enum SpecimenSource {
        /// Bilateral ears.
        BilateralEars => "BE",
        /// Bilateral eyes.
        BilateralEyes => "OU",
        /// Bilateral nares.
        BilateralNares => "BN",
        /// Buttock.
        Buttock => "BU",
        /// Chest tube.
        ChestTube => "CT",
        /// Left arm.
        LeftArm => "LA",
        /// Left anterior chest.
        LeftAnteriorChest => "LAC",
        /// Left antecubital fossa.
        LeftAntecubitalFossa => "LACF",
        /// Left deltoid.
        LeftDeltoid => "LD",
        /// Left ear.
        LeftEar => "LE",
        /// Left external jugular.
        LeftExternalJugular => "LEJ",
        /// Left eye.
        LeftEye => "OS",
        /// Left foot.
        LeftFoot => "LF",
        /// Left gluteus medius.
        LeftGluteusMedius => "LG",
        /// Left hand.
        LeftHand => "LH",
        /// Left internal jugular.
        LeftInternalJugular => "LIJ",
        /// Left lower abdominal quadrant.
        LeftLowerAbdominalQuadrant => "LLAQ",
        /// Left lower forearm.
        LeftLowerForearm => "LLFA",
        /// Left mid forearm.
        LeftMidForearm => "LMFA",
        /// Left naris.
        LeftNaris => "LN",
        /// Left posterior chest.
        LeftPosteriorChest => "LPC",
        /// Left subclavian.
        LeftSubclavian => "LSC",
        /// Left thigh.
        LeftThigh => "LT",
        /// Left upper arm.
        LeftUpperArm => "LUA",
        /// Left upper abdominal quadrant.
        LeftUpperAbdominalQuadrant => "LUAQ",
        /// Left upper forearm.
        LeftUpperForearm => "LUFA",
        /// Left ventragluteal.
        LeftVentragluteal => "LVG",
        /// Left vastus lateralis.
        LeftVastusLateralis => "LVL",
        /// Nebulized.
        Nebulized => "NB",
        /// Perianal.
        Perianal => "PA",
        /// Perineal.
        Perineal => "PERIN",
        /// Right arm.
        RightArm => "RA",
        /// Right anterior chest.
        RightAnteriorChest => "RAC",
        /// Right antecubital fossa.
        RightAntecubitalFossa => "RACF",
        /// Right deltoid.
        RightDeltoid => "RD",
        /// Right ear.
        RightEar => "RE",
        /// Right external jugular.
        RightExternalJugular => "REJ",
        /// Right eye.
        RightEye => "OD",
        /// Right foot.
        RightFoot => "RF",
        /// Right gluteus medius.
        RightGluteusMedius => "RG",
        /// Right hand.
        RightHand => "RH",
        /// Right internal jugular.
        RightInternalJugular => "RIJ",
        /// Right lower abdominal quadrant.
        RightLowerAbdominalQuadrant => "RLAQ",
        /// Right lower forearm.
        RightLowerForearm => "RLFA",
        /// Right mid forearm.
        RightMidForearm => "RMFA",
        /// Right naris.
        RightNaris => "RN",
        /// Right posterior chest.
        RightPosteriorChest => "RPC",
        /// Right subclavian.
        RightSubclavian => "RSC",
        /// Right thigh.
        RightThigh => "RT",
        /// Right upper arm.
        RightUpperArm => "RUA",
        /// Right upper abdominal quadrant.
        RightUpperAbdominalQuadrant => "RUAQ",
        /// Right upper forearm.
        RightUpperForearm => "RUFA",
        /// Right vastus lateralis.
        RightVastusLateralis => "RVL",
        /// Right ventragluteal.
        RightVentragluteal => "RVG",
    }
}

code_set! {
    /// Kind of material a specimen is (`SPC.type_cd`), from HL7 table 0070.
    pub enum SpecimenType {
        /// Abscess.
        Abscess => "ABS",
        /// Amniotic fluid.
        AmnioticFluid => "AMN",
        /// Aspirate.
        Aspirate => "ASP",
        /// Basophils.
        Basophils => "BPH",
        /// Bile fluid.
        BileFluid => "BIFL",
        /// Blood arterial.
        BloodArterial => "BLDA",
        /// Blood bag.
        BloodBag => "BBL",
        /// Blood capillary.
        BloodCapillary => "BLDC",
        /// Blood mixed venous.
        BloodMixedVenous => "BLMV",
        /// Blood product unit.
        BloodProductUnit => "BPU",
        /// Blood venous.
        BloodVenous => "BLDV",
        /// Bone.
        Bone => "BON",
        /// Breath (prefer `EXG`).
        Breath => "BRTH",
        /// Bronchial.
        Bronchial => "BRO",
        /// Burn.
        Burn => "BRN",
        /// Calculus (stone).
        Calculus => "CALC",
        /// Cardiac muscle.
        CardiacMuscle => "CDM",
        /// Cannula.
        Cannula => "CNL",
        /// Catheter tip.
        CatheterTip => "CTP",
        /// Cerebral spinal fluid.
        CerebralSpinalFluid => "CSF",
        /// Cervical mucus.
        CervicalMucus => "CVM",
        /// Cervix.
        Cervix => "CVX",
        /// Colostrum.
        Colostrum => "COL",
        /// Cord blood.
        CordBlood => "BLDCO",
        /// Conjunctiva.
        Conjunctiva => "CNJT",
        /// Curettage.
        Curettage => "CUR",
        /// Cyst.
        Cyst => "CYST",
        /// Dialysis fluid.
        DialysisFluid => "DIAF",
        /// Dose med or substance.
        Dose => "DOSE",
        /// Drain.
        Drain => "DRN",
        /// Duodenal fluid.
        DuodenalFluid => "DUFL",
        /// Ear.
        Ear => "EAR",
        /// Ear wax (cerumen).
        EarWax => "EARW",
        /// Electrode.
        Electrode => "ELT",
        /// Endocardium.
        Endocardium => "ENDC",
        /// Endometrium.
        Endometrium => "ENDM",
        /// Eosinophils.
        Eosinophils => "EOS",
        /// Erythrocytes.
        Erythrocytes => "RBC",
        /// Eye.
        Eye => "EYE",
        /// Exhaled gas (breath).
        ExhaledGas => "EXG",
        /// Fibroblasts.
        Fibroblasts => "FIB",
        /// Filter.
        Filter => "FLT",
        /// Fistula.
        Fistula => "FIST",
        /// Body fluid, unspecified.
        BodyFluid => "FLU",
        /// Gas.
        Gas => "GAS",
        /// Gastric fluid/contents.
        GastricFluid => "GAST",
        /// Genital.
        Genital => "GEN",
        /// Genital cervix.
        GenitalCervix => "GENC",
        /// Genital lochia.
        GenitalLochia => "GENL",
        /// Genital vaginal.
        GenitalVaginal => "GENV",
        /// Hair.
        Hair => "HAR",
        /// Inhaled gas.
        InhaledGas => "IHG",
        /// Intubation tube.
        IntubationTube => "IT",
        /// Isolate.
        Isolate => "ISLT",
        /// Lamella.
        Lamella => "LAM",
        /// Leukocytes.
        Leukocytes => "WBC",
        /// Line.
        Line => "LN",
        /// Line arterial.
        LineArterial => "LNA",
        /// Line venous.
        LineVenous => "LNV",
        /// Liquid NOS.
        Liquid => "LIQ",
        /// Lymphocytes.
        Lymphocytes => "LYM",
        /// Macrophages.
        Macrophages => "MAC",
        /// Marrow.
        Marrow => "MAR",
        /// Meconium.
        Meconium => "MEC",
        /// Menstrual blood.
        MenstrualBlood => "MBLD",
        /// Milk.
        Milk => "MLK",
        /// Breast milk.
        BreastMilk => "MILK",
        /// Nail.
        Nail => "NAIL",
        /// Nose (nasal passage).
        Nose => "NOS",
        /// Other.
        Other => "ORH",
        /// Pancreatic fluid.
        PancreaticFluid => "PAFL",
        /// Patient.
        Patient => "PAT",
        /// Peritoneal fluid/ascites.
        PeritonealFluid => "PRT",
        /// Placenta.
        Placenta => "PLC",
        /// Plasma.
        Plasma => "PLAS",
        /// Plasma bag.
        PlasmaBag => "PLB",
        /// Pleural fluid (thoracentesis fld).
        PleuralFluid => "PLR",
        /// Polymorphonuclear neutrophils.
        PolymorphonuclearNeutrophils => "PMN",
        /// Platelet poor plasma.
        PlateletPoorPlasma => "PPP",
        /// Platelet rich plasma.
        PlateletRichPlasma => "PRP",
        /// Pus.
        Pus => "PUS",
        /// Route of medicine.
        RouteOfMedicine => "RT",
        /// Saliva.
        Saliva => "SAL",
        /// Seminal fluid.
        SeminalFluid => "SMN",
        /// Serum.
        Serum => "SER",
        /// Skin.
        Skin => "SKN",
        /// Skeletal muscle.
        SkeletalMuscle => "SKM",
        /// Spermatozoa.
        Spermatozoa => "SPRM",
        /// Sputum.
        Sputum => "SPT",
        /// Sputum, coughed.
        SputumCoughed => "SPTC",
        /// Sputum, tracheal aspirate.
        SputumTrachealAspirate => "SPTT",
        /// Stone (prefer `CALC`).
        Stone => "STON",
        /// Stool, fecal.
        Stool => "STL",
        /// Sweat.
        Sweat => "SWT",
        /// Synovial fluid (joint fluid).
        SynovialFluid => "SNV",
        /// Tears.
        Tears => "TEAR",
        /// Throat.
        Throat => "THRT",
        /// Thrombocyte (platelet).
        Thrombocyte => "THRB",
        /// Tissue.
        Tissue => "TISS",
        /// Tissue gall bladder.
        TissueGallBladder => "TISG",
        /// Tissue large intestine.
        TissueLargeIntestine => "TLGI",
        /// Tissue lung.
        TissueLung => "TLNG",
        /// Tissue placenta.
        TissuePlacenta => "TISPL",
        /// Tissue small intestine.
        TissueSmallIntestine => "TSMI",
        /// Tissue ulcer.
        TissueUlcer => "TISU",
        /// Tube NOS.
        Tube => "TUB",
        /// Ulcer.
        Ulcer => "ULC",
        /// Umbilical blood.
        UmbilicalBlood => "UMB",
        /// Unknown medicine.
        UnknownMedicine => "UMED",
        /// Urethra.
        Urethra => "URTH",
        /// Urine.
        Urine => "UR",
        /// Urine clean catch.
        UrineCleanCatch => "URC",
        /// Urine catheter.
        UrineCatheter => "URT",
        /// Urine sediment.
        UrineSediment => "URNS",
        /// Unknown substance.
        UnknownSubstance => "USUB",
        /// Vitreous fluid.
        VitreousFluid => "VITF",
        /// Vomitus.
        Vomitus => "VOM",
        /// Whole blood.
        WholeBlood => "BLD",
        /// Whole body.
        WholeBody => "BDY",
        /// Water.
        Water => "WAT",
        /// Wick.
        Wick => "WICK",
        /// Wound.
        Wound => "WND",
        /// Wound abscess.
        WoundAbscess => "WNDA",
        /// Wound exudate.
        WoundExudate => "WNDE",
        /// Wound drainage.
        WoundDrainage => "WNDD",
    }
}

/// A specimen a patient test was run on.
///
/// # Examples
///
/// ```
/// use poct_types::{CodedValue, Specimen, SpecimenType};
///
/// let mut specimen = Specimen::default();
/// specimen.type_cd = Some(CodedValue::from(SpecimenType::BloodCapillary).into());
///
/// assert_eq!(specimen.specimen_type(), Some(SpecimenType::BloodCapillary));
/// assert!(Specimen::is_valid_type("BLDC"));
/// assert!(Specimen::is_valid_source("LACF"));
/// assert!(!Specimen::is_valid_source("ZZZ_BOGUS"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Specimen {
    /// When the specimen was drawn.
    pub specimen_dttm: DateTime<Utc>,
    /// Identifier of the specimen.
    pub specimen_id: Option<CodedValue>,
    /// Body site, such as arterial or left arm.
    pub source: Option<CodedElement>,
    /// Kind of material.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub type_cd: Option<CodedElement>,
}

impl Specimen {
    /// Returns true if `source` is a standard specimen source code.
    pub fn is_valid_source(source: &str) -> bool {
        SpecimenSource::is_valid(source)
    }

    /// Returns true if `type_code` is a standard specimen type code.
    pub fn is_valid_type(type_code: &str) -> bool {
        SpecimenType::is_valid(type_code)
    }

    /// Returns the typed source, if set and recognised.
    pub fn specimen_source(&self) -> Option<SpecimenSource> {
        self.source
            .as_ref()
            .and_then(|ce| SpecimenSource::from_code(ce.code()))
    }

    /// Returns the typed specimen type, if set and recognised.
    pub fn specimen_type(&self) -> Option<SpecimenType> {
        self.type_cd
            .as_ref()
            .and_then(|ce| SpecimenType::from_code(ce.code()))
    }
}
