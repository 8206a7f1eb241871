//! Shared fixtures for the analysis tests.

/// Key used to encrypt [`SAMPLE_PLAINTEXT`] in the recovery tests.
pub(crate) const SAMPLE_KEY: &str = "LEMON";

/// Ordinary English prose, long enough for every residue class of a
/// five-letter key to hold well over a hundred letters.
pub(crate) const SAMPLE_PLAINTEXT: &str = "\
The lighthouse stood at the end of a long and narrow spit of rock, and for \
most of the year the only people who saw it up close were the keeper and the \
men who brought him his supplies. Every morning he climbed the stairs to clean \
the great lens, and every evening he lit the lamp before the sun had quite gone \
down behind the hills. In the winter the storms came in from the west and the \
waves broke over the lower windows, but the tower had been built by careful \
hands and it never moved. The keeper kept a journal in which he wrote down the \
weather, the ships that passed, and the birds that rested on the gallery rail. \
Some of the entries were only a line or two, while others ran on for several \
pages when something unusual had happened. One autumn a small fishing boat lost \
its rudder near the point, and he watched for hours as the crew fought to keep \
her away from the reef. When the tide turned at last they drifted into the \
sheltered cove below the tower, and he went down with a rope and a lantern to \
help them ashore. They stayed with him for three days until the sea grew calm, \
and in that time they told him stories of the harbour towns along the coast, of \
markets and music and the people they had known. After they left, the keeper \
found that the silence of the place felt different, though nothing in it had \
really changed. He began to write longer entries in the evenings, describing \
the colour of the water and the shape of the clouds, and he wondered whether \
anyone would ever read what he had written about this quiet and distant life.";
