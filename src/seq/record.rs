// A record as read from a FastA file: the full header line (without the leading '>') and the raw
// sequence, which may still contain gap characters and lowercase residues.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    pub header: String,
    pub sequence: String,
}

impl SeqRecord {
    pub fn new(header: &str, sequence: &str) -> Self {
        SeqRecord {
            header: String::from(header),
            sequence: String::from(sequence),
        }
    }
}
