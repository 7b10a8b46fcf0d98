//! Vaccine mix
//!
//! The administered vaccine products with their reported efficacy and the share
//! of the vaccinated population that received each one. Iteration order is the
//! order products were added; the estimator sums per-product terms in that order.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Shares further than this from 1.0 are logged
pub const SHARE_SUM_TOLERANCE: f64 = 1e-6;

/// Efficacy and administered share for one product
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VaccineMixEntry {
    /// Fraction in `[0, 1)`
    pub efficacy: f64,
    /// Fraction of vaccinated people who received this product
    pub administered_share: f64,
}

/// A named product in the mix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaccineProduct {
    pub name: String,
    #[serde(flatten)]
    pub entry: VaccineMixEntry,
}

/// Ordered table of vaccine products
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<VaccineProduct>", into = "Vec<VaccineProduct>")]
pub struct VaccineMix {
    products: SmallVec<[VaccineProduct; 4]>,
}

impl VaccineMix {
    /// Create an empty mix
    #[must_use]
    pub fn new() -> Self {
        Self {
            products: SmallVec::new(),
        }
    }

    /// Build a mix from `(name, efficacy, administered_share)` triples
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64, f64)>,
        S: Into<String>,
    {
        let mut mix = Self::new();
        for (name, efficacy, administered_share) in entries {
            mix.add(
                name,
                VaccineMixEntry {
                    efficacy,
                    administered_share,
                },
            )?;
        }
        Ok(mix)
    }

    /// Add a product at the end of the table
    pub fn add(&mut self, name: impl Into<String>, entry: VaccineMixEntry) -> Result<()> {
        let name = name.into();
        validate_entry(&name, &entry)?;
        if self.get(&name).is_some() {
            return Err(Error::InvalidConfig(format!(
                "vaccine product {name} listed twice"
            )));
        }
        self.products.push(VaccineProduct { name, entry });
        Ok(())
    }

    /// Builder-style [`add`](Self::add)
    pub fn with_product(
        mut self,
        name: impl Into<String>,
        efficacy: f64,
        administered_share: f64,
    ) -> Result<Self> {
        self.add(
            name,
            VaccineMixEntry {
                efficacy,
                administered_share,
            },
        )?;
        Ok(self)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&VaccineMixEntry> {
        self.products
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.entry)
    }

    /// Products in table order
    pub fn iter(&self) -> impl Iterator<Item = &VaccineProduct> {
        self.products.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Sum of administered shares
    #[must_use]
    pub fn total_share(&self) -> f64 {
        self.products.iter().map(|p| p.entry.administered_share).sum()
    }

    /// Validate every entry and that the table is not empty
    ///
    /// Shares that do not add up to 1 are accepted; the deviation is logged.
    pub fn validate(&self) -> Result<()> {
        if self.products.is_empty() {
            return Err(Error::InvalidConfig("vaccine mix is empty".to_string()));
        }
        for product in &self.products {
            validate_entry(&product.name, &product.entry)?;
        }
        let total = self.total_share();
        if (total - 1.0).abs() > SHARE_SUM_TOLERANCE {
            log::warn!("Vaccine mix administered shares sum to {total}, not 1");
        }
        Ok(())
    }
}

impl Default for VaccineMix {
    /// Pfizer, Moderna and AstraZeneca as administered in Canada in mid-2021
    fn default() -> Self {
        let products = [
            ("Pfizer", 0.95, 0.77),
            ("Moderna", 0.941, 0.22),
            ("AstraZeneca", 0.62, 0.01),
        ]
        .into_iter()
        .map(|(name, efficacy, administered_share)| VaccineProduct {
            name: name.to_string(),
            entry: VaccineMixEntry {
                efficacy,
                administered_share,
            },
        })
        .collect();
        Self { products }
    }
}

impl TryFrom<Vec<VaccineProduct>> for VaccineMix {
    type Error = Error;

    fn try_from(products: Vec<VaccineProduct>) -> Result<Self> {
        let mut mix = Self::new();
        for product in products {
            mix.add(product.name, product.entry)?;
        }
        Ok(mix)
    }
}

impl From<VaccineMix> for Vec<VaccineProduct> {
    fn from(mix: VaccineMix) -> Self {
        mix.products.into_vec()
    }
}

fn validate_entry(name: &str, entry: &VaccineMixEntry) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidConfig(
            "vaccine product name is empty".to_string(),
        ));
    }
    if !(0.0..1.0).contains(&entry.efficacy) {
        return Err(Error::InvalidConfig(format!(
            "efficacy for {name} must be in [0, 1), got {}",
            entry.efficacy
        )));
    }
    if !(0.0..=1.0).contains(&entry.administered_share) {
        return Err(Error::InvalidConfig(format!(
            "administered share for {name} must be in [0, 1], got {}",
            entry.administered_share
        )));
    }
    Ok(())
}
