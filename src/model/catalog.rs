// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of win96-help and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Built-in help pages.

use super::{Block, HelpPage, TabContent, TabId};

pub fn catalog() -> &'static [HelpPage] {
    CATALOG
}

pub fn find_page(path: &str) -> Option<&'static HelpPage> {
    CATALOG.iter().find(|page| page.path == path)
}

const CATALOG: &[HelpPage] = &[BFS, DIJKSTRA, SEGMENT_TREE, SQL];

const BFS: HelpPage = HelpPage {
    path: "/algoViz/bfs",
    name: "Breadth-First Search",
    summary: "Layer-by-layer graph traversal with a FIFO queue.",
    tabs: [
        TabContent {
            tab: TabId::BigPicture,
            blocks: &[
                Block::Heading("History"),
                Block::Paragraph(
                    "Breadth-first search was described by Konrad Zuse in 1945 and rediscovered \
                     by Edward F. Moore in 1959 for finding the shortest path out of a maze.",
                ),
                Block::Heading("Mental model"),
                Block::Paragraph(
                    "Drop a stone in a pond. The ripple reaches every point at distance one \
                     before any point at distance two. BFS visits vertices in the same order.",
                ),
                Block::Heading("When to reach for it"),
                Block::Bullets(&[
                    "Shortest paths in unweighted graphs",
                    "Level-order traversal of trees",
                    "Connectivity and bipartiteness checks",
                ]),
            ],
        },
        TabContent {
            tab: TabId::CoreConcepts,
            blocks: &[
                Block::Heading("Frontier"),
                Block::Paragraph(
                    "The queue holds the frontier: discovered vertices whose neighbours have not \
                     been examined yet. Everything in it is at distance d or d + 1.",
                ),
                Block::Heading("Visited set"),
                Block::Paragraph(
                    "Mark a vertex when it is enqueued, not when it is dequeued, or the same \
                     vertex can enter the queue many times.",
                ),
                Block::Heading("Complexity"),
                Block::Table {
                    headers: &["Measure", "Cost"],
                    rows: &[&["Time", "O(V + E)"], &["Space", "O(V)"]],
                },
            ],
        },
        TabContent {
            tab: TabId::Examples,
            blocks: &[
                Block::Heading("Grid distances"),
                Block::Code {
                    lang: "rust",
                    source: "let mut queue = VecDeque::from([start]);\n\
                             dist[start] = 0;\n\
                             while let Some(v) = queue.pop_front() {\n    \
                                 for &w in &adj[v] {\n        \
                                     if dist[w] == usize::MAX {\n            \
                                         dist[w] = dist[v] + 1;\n            \
                                         queue.push_back(w);\n        \
                                     }\n    \
                                 }\n\
                             }",
                },
            ],
        },
        TabContent {
            tab: TabId::Glossary,
            blocks: &[Block::Table {
                headers: &["Term", "Meaning"],
                rows: &[
                    &["Frontier", "Discovered but unexpanded vertices"],
                    &["Layer", "All vertices at the same distance from the source"],
                    &["Parent pointer", "Edge used to discover a vertex; rebuilds the path"],
                ],
            }],
        },
    ],
};

const DIJKSTRA: HelpPage = HelpPage {
    path: "/algoViz/dijkstra",
    name: "Dijkstra's Algorithm",
    summary: "Single-source shortest paths with non-negative edge weights.",
    tabs: [
        TabContent {
            tab: TabId::BigPicture,
            blocks: &[
                Block::Heading("History"),
                Block::Paragraph(
                    "Edsger Dijkstra designed the algorithm in 1956 in about twenty minutes, \
                     sitting on a café terrace in Amsterdam, and published it in 1959.",
                ),
                Block::Heading("Mental model"),
                Block::Paragraph(
                    "BFS where the ripple moves at the speed of the edge weights: always settle \
                     the closest unsettled vertex next.",
                ),
            ],
        },
        TabContent {
            tab: TabId::CoreConcepts,
            blocks: &[
                Block::Heading("Relaxation"),
                Block::Paragraph(
                    "For an edge (u, v, w), if dist[u] + w < dist[v] then dist[v] becomes \
                     dist[u] + w. Every shortest-path algorithm is a schedule of relaxations.",
                ),
                Block::Heading("Why weights must be non-negative"),
                Block::Paragraph(
                    "Once a vertex is popped from the heap its distance is final. A negative \
                     edge discovered later could still shorten it; use Bellman-Ford instead.",
                ),
                Block::Heading("Complexity"),
                Block::Table {
                    headers: &["Queue", "Time"],
                    rows: &[
                        &["Binary heap", "O((V + E) log V)"],
                        &["Fibonacci heap", "O(E + V log V)"],
                        &["Array", "O(V^2)"],
                    ],
                },
            ],
        },
        TabContent {
            tab: TabId::Examples,
            blocks: &[
                Block::Heading("Lazy deletion"),
                Block::Paragraph("Push duplicates and skip stale entries when they surface."),
                Block::Code {
                    lang: "rust",
                    source: "while let Some(Reverse((d, v))) = heap.pop() {\n    \
                                 if d > dist[v] { continue; }\n    \
                                 for &(w, cost) in &adj[v] {\n        \
                                     if d + cost < dist[w] {\n            \
                                         dist[w] = d + cost;\n            \
                                         heap.push(Reverse((dist[w], w)));\n        \
                                     }\n    \
                                 }\n\
                             }",
                },
            ],
        },
        TabContent {
            tab: TabId::Glossary,
            blocks: &[Block::Table {
                headers: &["Term", "Meaning"],
                rows: &[
                    &["Settled", "Vertex whose shortest distance is final"],
                    &["Relax", "Try to improve a distance through one edge"],
                    &["Decrease-key", "Heap operation lowering a stored priority"],
                ],
            }],
        },
    ],
};

const SEGMENT_TREE: HelpPage = HelpPage {
    path: "/algoViz/segment-tree",
    name: "Segment Tree",
    summary: "Range queries and point updates in logarithmic time.",
    tabs: [
        TabContent {
            tab: TabId::BigPicture,
            blocks: &[
                Block::Heading("Mental model"),
                Block::Paragraph(
                    "A tournament bracket over an array: every internal node stores the answer \
                     for the interval of leaves below it.",
                ),
                Block::Heading("When to reach for it"),
                Block::Bullets(&[
                    "Range sum, min or max with updates in between",
                    "Any associative combine function",
                    "Lazy propagation for range assignments",
                ]),
            ],
        },
        TabContent {
            tab: TabId::CoreConcepts,
            blocks: &[
                Block::Heading("Layout"),
                Block::Paragraph(
                    "Store the tree in an array of size 2n. Leaves live at n..2n and node i has \
                     children 2i and 2i + 1.",
                ),
                Block::Heading("Query"),
                Block::Paragraph(
                    "Walk two pointers up from both ends of the range, folding in the nodes \
                     that fall fully inside.",
                ),
            ],
        },
        TabContent {
            tab: TabId::Examples,
            blocks: &[
                Block::Heading("Iterative range sum"),
                Block::Code {
                    lang: "rust",
                    source: "let (mut l, mut r) = (l + n, r + n);\n\
                             let mut acc = 0;\n\
                             while l < r {\n    \
                                 if l & 1 == 1 { acc += t[l]; l += 1; }\n    \
                                 if r & 1 == 1 { r -= 1; acc += t[r]; }\n    \
                                 l >>= 1; r >>= 1;\n\
                             }",
                },
            ],
        },
        TabContent {
            tab: TabId::Glossary,
            blocks: &[Block::Table {
                headers: &["Term", "Meaning"],
                rows: &[
                    &["Combine", "Associative function merging two child answers"],
                    &["Lazy tag", "Pending update not yet pushed to the children"],
                ],
            }],
        },
    ],
};

const SQL: HelpPage = HelpPage {
    path: "/algoViz/sql",
    name: "SQL",
    summary: "Declarative queries over relations.",
    tabs: [
        TabContent {
            tab: TabId::BigPicture,
            blocks: &[
                Block::Heading("History"),
                Block::Paragraph(
                    "SEQUEL was developed at IBM in the early 1970s by Donald Chamberlin and \
                     Raymond Boyce on top of Codd's relational model.",
                ),
                Block::Heading("Mental model"),
                Block::Paragraph(
                    "Describe the rows you want, not how to fetch them. The planner picks the \
                     access paths and join order.",
                ),
            ],
        },
        TabContent {
            tab: TabId::CoreConcepts,
            blocks: &[
                Block::Heading("Logical evaluation order"),
                Block::Bullets(&[
                    "FROM and JOIN",
                    "WHERE",
                    "GROUP BY and HAVING",
                    "SELECT",
                    "ORDER BY and LIMIT",
                ]),
                Block::Heading("Joins"),
                Block::Table {
                    headers: &["Join", "Keeps"],
                    rows: &[
                        &["INNER", "Matching pairs only"],
                        &["LEFT", "Every left row, NULLs when unmatched"],
                        &["FULL", "Every row from both sides"],
                    ],
                },
            ],
        },
        TabContent {
            tab: TabId::Examples,
            blocks: &[
                Block::Heading("Top customers"),
                Block::Code {
                    lang: "sql",
                    source: "SELECT c.name, SUM(o.total) AS spent\n\
                             FROM customers c\n\
                             JOIN orders o ON o.customer_id = c.id\n\
                             GROUP BY c.name\n\
                             ORDER BY spent DESC\n\
                             LIMIT 10;",
                },
            ],
        },
        TabContent {
            tab: TabId::Glossary,
            blocks: &[Block::Table {
                headers: &["Term", "Meaning"],
                rows: &[
                    &["Relation", "A table: a set of tuples sharing a schema"],
                    &["Predicate", "Boolean condition filtering rows"],
                    &["Index", "Auxiliary structure speeding up lookups"],
                ],
            }],
        },
    ],
};
