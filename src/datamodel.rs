/// A stored author record.
///
/// `name` is optional at rest because `addAuthor` accepts an omitted name,
/// even though the GraphQL type declares it non-null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: i32,
    pub name: Option<String>,
}

/// A stored book record.
///
/// Books created through `addBook` never carry a `date`, and may lack a
/// `name` or `author_id` when those arguments were omitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i32,
    pub name: Option<String>,
    pub date: Option<String>,
    pub author_id: Option<i32>,
}

struct SeedAuthor {
    id: i32,
    name: &'static str,
}

struct SeedBook {
    id: i32,
    name: &'static str,
    author_id: i32,
    date: &'static str,
}

static SEED_AUTHORS: &[SeedAuthor] = &[
    SeedAuthor { id: 1, name: "Ana" },
    SeedAuthor {
        id: 2,
        name: "Bruno",
    },
];

static SEED_BOOKS: &[SeedBook] = &[
    SeedBook {
        id: 1,
        name: "Folha",
        author_id: 1,
        date: "12/2/1945",
    },
    SeedBook {
        id: 2,
        name: "Crepe",
        author_id: 1,
        date: "12/2/1945",
    },
    SeedBook {
        id: 3,
        name: "Cavalo",
        author_id: 2,
        date: "12/2/1945",
    },
];

pub fn seed_authors() -> Vec<Author> {
    SEED_AUTHORS
        .iter()
        .map(|a| Author {
            id: a.id,
            name: Some(a.name.into()),
        })
        .collect()
}

pub fn seed_books() -> Vec<Book> {
    SEED_BOOKS
        .iter()
        .map(|b| Book {
            id: b.id,
            name: Some(b.name.into()),
            date: Some(b.date.into()),
            author_id: Some(b.author_id),
        })
        .collect()
}
