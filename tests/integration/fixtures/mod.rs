// Book excerpt fixtures with known transform output
#![allow(dead_code)]

/// Marker line as it appears in exported book excerpts
pub const MARKER: &str = "Click here to view code image";

/// Prose followed by a marker line, a code block and more prose
pub const BOOK_EXCERPT: &str = "11.7 Generic Methods and Constructors
A method is generic if it declares type variables. These are known as the formal type parameters of the method. The form of the formal type parameter list is identical to a type parameter list of a class or interface.
Click here to view code image
public static <T> void fromArrayToCollection(T[] a, Collection<T> c) {
    for (T o : a) {
        c.add(o); // Correct. Really.
    }
}
Generic methods are invoked like ordinary methods, e.g. with an explicit type. Version 1.5 added them. See also Section 8.4.4.";

/// Expected output for BOOK_EXCERPT
pub const BOOK_EXCERPT_EXPECTED: &str = concat!(
    "11.7 Generic Methods and Constructors\n",
    "A method is generic if it declares type variables.\n",
    "\n",
    "These are known as the formal type parameters of the method.\n",
    "\n",
    "The form of the formal type parameter list is identical to a type parameter list of a class or interface.\n",
    "\n",
    "public static <T> void fromArrayToCollection(T[] a, Collection<T> c) {\n",
    "    for (T o : a) {\n",
    "        c.add(o); // Correct.\n",
    "Really.\n",
    "    }\n",
    "}\n",
    "Generic methods are invoked like ordinary methods, e.g.\n",
    " with an explicit type.\n",
    "\n",
    "Version 1.5 added them.\n",
    "\n",
    "See also Section 8.4.4.\n",
    "\n",
);

/// Prose without any braces or marker lines
pub const PLAIN_PROSE: &str = "See Foo. Bar does X.";

pub const PLAIN_PROSE_EXPECTED: &str = "See Foo.\n\nBar does X.\n\n";

/// Stray closing brace on the second line
pub const UNBALANCED_TEXT: &str = "Fine so far.\noops } here";

/// Documents used for property checks
pub const PROPERTY_CORPUS: &[&str] = &[
    "",
    "no periods at all",
    "One. Two. three. 4. Five.",
    "Ellipsis... And more...Next",
    "Decimal 3.14 and e.g. abbreviations. Then More.",
    "Code:{ a.B(); c. D; }After.Word",
    "{ outer { inner. X } tail.Y } done.Z",
    "Tabs.\tand\r\nwindows. Lines.\r\n",
    "Unicode. Über. ünter.Ärger",
    "Trailing space. ",
    "a. . A",
];
