//! Test utilities and fixtures for book-genres tests.
//!
//! The XML fixtures below are trimmed copies of real Goodreads and ISBNdb
//! responses. They keep the element order intact, since every extraction
//! rule we have is positional.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{chandler_aggregator, BIG_SLEEP_ISBN};
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let aggregator = chandler_aggregator();
//!     let genres = aggregator.title_genre("The Big Sleep").await;
//!     // ... test logic
//! }
//! ```

use crate::lookup::aggregator::CategoryAggregator;
use crate::lookup::resolver::CatalogResolver;
use crate::lookup::traits::mocks::{MockGoodreads, MockIsbndb};

pub const BIG_SLEEP_ISBN: &str = "0394758285";

/// ISBNs on the first page of Raymond Chandler's works, in page order
pub const CHANDLER_ISBNS: [&str; 7] = [
    "0394758285",
    "0394757688",
    "0394757696",
    "0394757661",
    "039475770X",
    "0394758269",
    "0394758277",
];

/// `search.xml?q=The Big Sleep`
pub const SEARCH_BIG_SLEEP: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<GoodreadsResponse>
  <Request>
    <authentication>true</authentication>
      <key><![CDATA[test-key]]></key>
    <method><![CDATA[search_index]]></method>
  </Request>
  <search>
    <query><![CDATA[The Big Sleep]]></query>
    <results-start>1</results-start>
    <results-end>2</results-end>
    <total-results>2</total-results>
    <source>Goodreads</source>
    <query-time-seconds>0.07</query-time-seconds>
    <results>
      <work>
        <id type="integer">1373469</id>
        <books_count type="integer">186</books_count>
        <ratings_count type="integer">118213</ratings_count>
        <text_reviews_count type="integer">5314</text_reviews_count>
        <original_publication_year type="integer">1939</original_publication_year>
        <average_rating>3.98</average_rating>
        <best_book type="Book">
          <id type="integer">2052</id>
          <title>The Big Sleep (Philip Marlowe, #1)</title>
          <author>
            <id type="integer">1377</id>
            <name>Raymond Chandler</name>
          </author>
          <image_url>https://images.gr-assets.com/books/2052m.jpg</image_url>
        </best_book>
      </work>
      <work>
        <id type="integer">2190470</id>
        <books_count type="integer">12</books_count>
        <ratings_count type="integer">402</ratings_count>
        <average_rating>4.11</average_rating>
        <best_book type="Book">
          <id type="integer">8827741</id>
          <title>The Big Sleep and Farewell, My Lovely</title>
          <author>
            <id type="integer">1377</id>
            <name>Raymond Chandler</name>
          </author>
        </best_book>
      </work>
    </results>
  </search>
</GoodreadsResponse>"#;

/// `search.xml?q=Raymond Chandler`
pub const SEARCH_RAYMOND_CHANDLER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<GoodreadsResponse>
  <search>
    <query><![CDATA[Raymond Chandler]]></query>
    <total-results>1</total-results>
    <results>
      <work>
        <id type="integer">1373469</id>
        <best_book type="Book">
          <id type="integer">2052</id>
          <title>The Big Sleep (Philip Marlowe, #1)</title>
          <author>
            <id type="integer">1377</id>
            <name>Raymond Chandler</name>
          </author>
        </best_book>
      </work>
    </results>
  </search>
</GoodreadsResponse>"#;

/// `search.xml` for a query nothing matches
pub const SEARCH_NO_RESULTS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<GoodreadsResponse>
  <search>
    <query><![CDATA[qqqzzzxxy]]></query>
    <results-start>1</results-start>
    <results-end>0</results-end>
    <total-results>0</total-results>
    <source>Goodreads</source>
    <results>
    </results>
  </search>
</GoodreadsResponse>"#;

/// `book/title.xml?title=The Big Sleep`
pub const TITLE_BIG_SLEEP: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<GoodreadsResponse>
  <Request>
    <authentication>true</authentication>
    <method><![CDATA[book_title]]></method>
  </Request>
  <book>
    <id>2052</id>
    <title><![CDATA[The Big Sleep (Philip Marlowe, #1)]]></title>
    <isbn><![CDATA[0394758285]]></isbn>
    <isbn13><![CDATA[9780394758282]]></isbn13>
    <asin><![CDATA[]]></asin>
    <publication_year>1988</publication_year>
    <publisher>Vintage Crime</publisher>
    <work>
      <id type="integer">1373469</id>
      <books_count type="integer">186</books_count>
      <original_title>The Big Sleep</original_title>
    </work>
    <average_rating>3.98</average_rating>
    <authors>
      <author>
        <id>1377</id>
        <name>Raymond Chandler</name>
        <role></role>
        <image_url nophoto='false'><![CDATA[https://images.gr-assets.com/authors/1377p5.jpg]]></image_url>
        <average_rating>4.03</average_rating>
      </author>
    </authors>
    <similar_books>
      <book>
        <id>10962</id>
        <title><![CDATA[The Maltese Falcon]]></title>
        <isbn>0679722645</isbn>
        <authors>
          <author>
            <id>2921</id>
            <name>Dashiell Hammett</name>
          </author>
        </authors>
      </book>
    </similar_books>
  </book>
</GoodreadsResponse>"#;

/// `book/title.xml` for a book Goodreads knows without an ISBN
pub const TITLE_WITHOUT_ISBN: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<GoodreadsResponse>
  <book>
    <id>99</id>
    <title><![CDATA[Pamphlet]]></title>
    <isbn><![CDATA[]]></isbn>
    <authors>
      <author>
        <id>5</id>
        <name>Anonymous</name>
      </author>
    </authors>
    <similar_books>
      <book><id>100</id><isbn>0679722645</isbn></book>
    </similar_books>
  </book>
</GoodreadsResponse>"#;

/// `author/list/1377.xml` (first page)
pub const CHANDLER_WORKS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<GoodreadsResponse>
  <author>
    <id>1377</id>
    <name>Raymond Chandler</name>
    <books start="1" end="9" total="9">
      <book><id type="integer">2052</id><isbn>0394758285</isbn><isbn13>9780394758282</isbn13><title>The Big Sleep</title></book>
      <book><id type="integer">2053</id><isbn>0394757688</isbn><isbn13>9780394757681</isbn13><title>Farewell, My Lovely</title></book>
      <book><id type="integer">2054</id><isbn nil="true"/><isbn13 nil="true"/><title>Trouble Is My Business</title></book>
      <book><id type="integer">2055</id><isbn>0394757696</isbn><title>The Long Goodbye</title></book>
      <book><id type="integer">2056</id><isbn>0394757661</isbn><title>The High Window</title></book>
      <book><id type="integer">2057</id><isbn>039475770X</isbn><title>The Lady in the Lake</title></book>
      <book><id type="integer">2058</id><isbn>0394758269</isbn><title>The Little Sister</title></book>
      <book><id type="integer">2059</id><isbn>0394758277</isbn><title>Playback</title></book>
    </books>
  </author>
</GoodreadsResponse>"#;

/// `books.xml?results=subjects&index1=isbn&value1=0394758285`
pub const SUBJECTS_BIG_SLEEP: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ISBNdb server_time="2013-02-01T18:12:53Z">
<BookList total_results="1" page_size="10" page_number="1" shown_results="1">
<BookData book_id="the_big_sleep_a01" isbn="0394758285" isbn13="9780394758282">
<Title>The big sleep</Title>
<TitleLong></TitleLong>
<AuthorsText>Raymond Chandler</AuthorsText>
<PublisherText publisher_id="vintage_books">New York : Vintage Books, 1988, c1939.</PublisherText>
<Subjects>
<Subject subject_id="amazon_com_fiction">Amazon.com -- Fiction</Subject>
<Subject subject_id="amazon_com_authors_a_z_c_chandler_raymond">Amazon.com -- Authors, A-Z -- ( C ) -- Chandler, Raymond</Subject>
<Subject subject_id="private_investigators_california_los_angeles_fiction">Private investigators -- California -- Los Angeles -- Fiction</Subject>
<Subject subject_id="marlowe_philip_fictitious_character_fiction">Marlowe, Philip (Fictitious character) -- Fiction</Subject>
<Subject subject_id="amazon_com_mystery_thrillers_mystery_hard_boiled">Amazon.com -- Mystery &amp; Thrillers -- Mystery -- Hard-Boiled</Subject>
<Subject subject_id="los_angeles_calif_fiction">Los Angeles (Calif.) -- Fiction</Subject>
<Subject subject_id="detective_and_mystery_stories">Detective and mystery stories</Subject>
<Subject subject_id="amazon_com_literature_fiction_classics">Amazon.com -- Literature &amp; Fiction -- Classics</Subject>
</Subjects>
</BookData>
</BookList>
</ISBNdb>"#;

/// ISBNdb answer for an ISBN it has no subjects for
pub const SUBJECTS_EMPTY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ISBNdb server_time="2013-02-01T18:12:53Z">
<BookList total_results="0" page_size="10" page_number="1" shown_results="0">
</BookList>
</ISBNdb>"#;

/// ISBNdb answer for a bad access key
pub const SUBJECTS_KEY_ERROR: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ISBNdb server_time="2013-02-01T18:12:53Z">
<ErrorMessage>Access key error</ErrorMessage>
</ISBNdb>"#;

/// Build an ISBNdb subjects response for arbitrary subject lines
pub fn subjects_xml(isbn: &str, subjects: &[&str]) -> String {
    let lines: String = subjects
        .iter()
        .map(|s| format!("<Subject>{}</Subject>\n", s.replace('&', "&amp;")))
        .collect();
    format!(
        "<ISBNdb><BookList total_results=\"1\"><BookData isbn=\"{isbn}\">\
         <Subjects>\n{lines}</Subjects></BookData></BookList></ISBNdb>"
    )
}

/// Goodreads side of the "The Big Sleep" / "Raymond Chandler" scenarios
pub fn chandler_goodreads() -> MockGoodreads {
    MockGoodreads::empty()
        .with_search("The Big Sleep", SEARCH_BIG_SLEEP)
        .with_search("Raymond Chandler", SEARCH_RAYMOND_CHANDLER)
        .with_title_detail("The Big Sleep", TITLE_BIG_SLEEP)
        .with_author_works("1377", CHANDLER_WORKS)
}

/// ISBNdb side: one subjects document per Chandler ISBN
///
/// The sixth and seventh books carry subjects that only show up if more
/// than five works get aggregated.
pub fn chandler_isbndb() -> MockIsbndb {
    MockIsbndb::empty()
        .with_subjects(CHANDLER_ISBNS[0], SUBJECTS_BIG_SLEEP)
        .with_subjects(
            CHANDLER_ISBNS[1],
            &subjects_xml(
                CHANDLER_ISBNS[1],
                &["Fiction -- crime fiction", "None", "Detectives -- California"],
            ),
        )
        .with_subjects(
            CHANDLER_ISBNS[2],
            &subjects_xml(CHANDLER_ISBNS[2], &["Amazon.com -- Mystery", "Novela"]),
        )
        .with_subjects(CHANDLER_ISBNS[3], SUBJECTS_EMPTY)
        .with_subjects(
            CHANDLER_ISBNS[4],
            &subjects_xml(CHANDLER_ISBNS[4], &["Short stories", "Authors, A-Z"]),
        )
        .with_subjects(
            CHANDLER_ISBNS[5],
            &subjects_xml(CHANDLER_ISBNS[5], &["Science fiction"]),
        )
        .with_subjects(
            CHANDLER_ISBNS[6],
            &subjects_xml(CHANDLER_ISBNS[6], &["Romance"]),
        )
}

/// Aggregator wired to the Chandler fixtures
pub fn chandler_aggregator() -> CategoryAggregator<MockGoodreads, MockIsbndb> {
    CategoryAggregator::new(CatalogResolver::new(chandler_goodreads()), chandler_isbndb())
}
