// Version ::= INTEGER { v1(0), v2(1), v3(2) }
enum_integer!(enum Version {
    Version1 = 0,
    Version2 = 1,
    Version3 = 2,
});

impl Version {
    /// Version as people count it, starting at 1.
    pub fn number(&self) -> u8 {
        match *self {
            Version::Version1 => 1,
            Version::Version2 => 2,
            Version::Version3 => 3,
        }
    }
}
