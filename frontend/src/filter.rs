//! In-memory destination filtering for the explore and maps screens.
//!
//! Works on whatever list the screen already holds; at tens to low hundreds
//! of records a linear scan is plenty, so there is no index and no
//! pagination. Clearing a criterion restores the unfiltered list.

use lampunggo_shared::Wisata;

/// Active filter criteria.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WisataFilter {
    /// Exact category name, compared case-insensitively.
    pub kategori: Option<String>,
    /// Free-text needle matched against name, description and address.
    pub query: String,
}

impl WisataFilter {
    pub fn by_kategori(kategori: Option<String>) -> Self {
        Self {
            kategori,
            query: String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.kategori.is_none() && self.query.trim().is_empty()
    }

    fn matches(&self, wisata: &Wisata) -> bool {
        if let Some(wanted) = &self.kategori {
            // A record without an embedded category can never satisfy a
            // category criterion.
            match wisata.kategori_nama() {
                Some(nama) if nama.eq_ignore_ascii_case(wanted) => {}
                _ => return false,
            }
        }
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [&wisata.nama, &wisata.deskripsi, &wisata.alamat]
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// The subset of `list` matching `filter`, in original order.
pub fn filter_wisata(list: &[Wisata], filter: &WisataFilter) -> Vec<Wisata> {
    list.iter()
        .filter(|wisata| filter.matches(wisata))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests;
