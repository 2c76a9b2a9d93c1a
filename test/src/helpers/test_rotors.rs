use enigma::RotorDescriptor;

/// Wirings of the historical naval rotor set, in cycle notation
pub struct TestRotors;

impl TestRotors {
    pub const I: &'static str = "(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)";
    pub const II: &'static str = "(FIXVYOMW) (CDKLHUP) (ESZ) (BJ) (GR) (NT) (A) (Q)";
    pub const III: &'static str = "(ABDHPEJT) (CFLVMZOYQIRWUKXSG) (N)";
    pub const IV: &'static str = "(AEPLIYWCOXMRFZBSTGJQNH) (DV) (KU)";
    pub const V: &'static str = "(AVOLDRWFIUQ) (BZKSMNHYC) (EGTJPX)";
    pub const BETA: &'static str = "(ALBEVFCYODJWUGNMQTZSKPR) (HIX)";
    pub const REFLECTOR_B: &'static str =
        "(AY) (BR) (CU) (DH) (EQ) (FS) (GL) (IP) (JX) (KN) (MO) (TZ) (VW)";
    pub const REFLECTOR_C: &'static str =
        "(AF) (BV) (CP) (DJ) (EI) (GO) (HY) (KR) (LZ) (MX) (NW) (QT) (SU)";

    /// Rotors I to V, the fixed Beta rotor and reflectors B and C
    pub fn naval() -> Vec<RotorDescriptor> {
        vec![
            RotorDescriptor::moving("I", "Q", Self::I),
            RotorDescriptor::moving("II", "E", Self::II),
            RotorDescriptor::moving("III", "V", Self::III),
            RotorDescriptor::moving("IV", "J", Self::IV),
            RotorDescriptor::moving("V", "Z", Self::V),
            RotorDescriptor::fixed("Beta", Self::BETA),
            RotorDescriptor::reflector("B", Self::REFLECTOR_B),
            RotorDescriptor::reflector("C", Self::REFLECTOR_C),
        ]
    }
}
