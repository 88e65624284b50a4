use serde::Serialize;

use super::model::{Category, NormalizedItem};
use super::normalize::raw_id;

#[derive(Debug, Clone, Default)]
pub struct AggregateStore {
    mail: Vec<NormalizedItem>,
    letters: Vec<NormalizedItem>,
    packages: Vec<NormalizedItem>,
    all: Vec<NormalizedItem>,
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize)]
pub struct CategoryCounts {
    pub mail: usize,
    pub letters: usize,
    pub packages: usize,
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize)]
pub struct Stats {
    pub per_category: CategoryCounts,
    pub unread: usize,
    pub total: usize,
}

impl AggregateStore {
    pub fn load(
        mail: Vec<NormalizedItem>,
        letters: Vec<NormalizedItem>,
        packages: Vec<NormalizedItem>,
    ) -> Self {
        let all = mail
            .iter()
            .chain(&letters)
            .chain(&packages)
            .cloned()
            .collect();

        Self {
            mail,
            letters,
            packages,
            all,
        }
    }

    pub fn category(&self, category: Category) -> &[NormalizedItem] {
        match category {
            Category::Mail => &self.mail,
            Category::Letter => &self.letters,
            Category::Package => &self.packages,
        }
    }

    pub fn all(&self) -> &[NormalizedItem] {
        &self.all
    }

    pub fn find(&self, id: &str) -> Option<&NormalizedItem> {
        self.all.iter().find(|item| item.id == id)
    }

    // An exact id wins; otherwise every item whose feed-side id matches.
    pub fn lookup(&self, id: &str) -> Vec<&NormalizedItem> {
        if let Some(item) = self.find(id) {
            return vec![item];
        }

        self.all
            .iter()
            .filter(|item| raw_id(&item.raw).as_deref() == Some(id))
            .collect()
    }

    pub fn stats(&self) -> Stats {
        let per_category = CategoryCounts {
            mail: self.mail.len(),
            letters: self.letters.len(),
            packages: self.packages.len(),
        };

        Stats {
            per_category,
            unread: self.all.iter().filter(|item| item.unread).count(),
            total: self.all.len(),
        }
    }
}
