use crc32fast::Hasher;

/// Generate document ID from document name using CRC32
pub fn get_document_id(name: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(name.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential ID generator for field nodes within a document
///
/// Ids are `"{seed}-{n}"` with a strictly increasing counter, so a field id
/// is never reissued within a document, even after the field is deleted.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String, // Document ID (CRC32)
    count: u32,   // Sequential counter
}

impl IdGenerator {
    pub fn new(document_name: &str) -> Self {
        Self {
            seed: get_document_id(document_name),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate next sequential ID
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    /// Get document ID seed
    pub fn seed(&self) -> &str {
        &self.seed
    }
}
