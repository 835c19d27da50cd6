//! Static configuration tables consumed by the dual point resolver and the
//! manifold corrector. Both tables are generated offline and linked into the
//! binary as constants; the extraction code never mutates them.
//!
//! The tables are indexed by the 8-bit cell configuration code and use the
//! cell frame below. Corner `k` sits at offset `(dx, dy, dz)` with
//! `k = dx + 2*dy + 4*dz`; edges follow the classic marching cubes
//! convention:
//!
//! ```text
//!        y
//!        |     2-------------------3
//!        |    /|                  /|
//!        |   6-------------------7 |
//!        0--/x |                 | |
//!          /   0-----------------|-1
//!         z   /                  |/
//!             4-------------------5
//! ```
//!
//! Bottom ring (y = 0): 0 (back, 0-1), 1 (right, 1-5), 2 (front, 4-5),
//! 3 (left, 0-4). Top ring (y = 1): 4 (back, 2-3), 5 (right, 3-7),
//! 6 (front, 6-7), 7 (left, 2-6). Verticals: 8 (0-2), 9 (1-3), 10 (5-7),
//! 11 (4-6).

/// Dual point codes for every cell configuration.
///
/// Each configuration produces up to four marching cubes surface patches and
/// thus up to four dual points. A slot holds the 12-bit edge mask of one
/// patch; slots fill from index 0 and unused slots are zero. Distinct slots
/// of one configuration never share an edge bit.
pub static DUAL_POINTS_LIST: [[u16; 4]; 256] = [
    [0, 0, 0, 0], // 0
    [0x109, 0, 0, 0], // 1
    [0x203, 0, 0, 0], // 2
    [0x30a, 0, 0, 0], // 3
    [0x190, 0, 0, 0], // 4
    [0x099, 0, 0, 0], // 5
    [0x203, 0x190, 0, 0], // 6
    [0x29a, 0, 0, 0], // 7
    [0x230, 0, 0, 0], // 8
    [0x109, 0x230, 0, 0], // 9
    [0x033, 0, 0, 0], // 10
    [0x13a, 0, 0, 0], // 11
    [0x3a0, 0, 0, 0], // 12
    [0x2a9, 0, 0, 0], // 13
    [0x1a3, 0, 0, 0], // 14
    [0x0aa, 0, 0, 0], // 15
    [0x80c, 0, 0, 0], // 16
    [0x905, 0, 0, 0], // 17
    [0x203, 0x80c, 0, 0], // 18
    [0xb06, 0, 0, 0], // 19
    [0x80c, 0x190, 0, 0], // 20
    [0x895, 0, 0, 0], // 21
    [0x203, 0x80c, 0x190, 0], // 22
    [0xa96, 0, 0, 0], // 23
    [0x230, 0x80c, 0, 0], // 24
    [0x905, 0x230, 0, 0], // 25
    [0x033, 0x80c, 0, 0], // 26
    [0x936, 0, 0, 0], // 27
    [0x3a0, 0x80c, 0, 0], // 28
    [0xaa5, 0, 0, 0], // 29
    [0x80c, 0x1a3, 0, 0], // 30
    [0x8a6, 0, 0, 0], // 31
    [0x406, 0, 0, 0], // 32
    [0x406, 0x109, 0, 0], // 33
    [0x605, 0, 0, 0], // 34
    [0x70c, 0, 0, 0], // 35
    [0x406, 0x190, 0, 0], // 36
    [0x099, 0x406, 0, 0], // 37
    [0x605, 0x190, 0, 0], // 38
    [0x69c, 0, 0, 0], // 39
    [0x230, 0x406, 0, 0], // 40
    [0x109, 0x230, 0x406, 0], // 41
    [0x435, 0, 0, 0], // 42
    [0x53c, 0, 0, 0], // 43
    [0x3a0, 0x406, 0, 0], // 44
    [0x406, 0x2a9, 0, 0], // 45
    [0x5a5, 0, 0, 0], // 46
    [0x4ac, 0, 0, 0], // 47
    [0xc0a, 0, 0, 0], // 48
    [0xd03, 0, 0, 0], // 49
    [0xe09, 0, 0, 0], // 50
    [0xf00, 0, 0, 0], // 51
    [0xc0a, 0x190, 0, 0], // 52
    [0xc93, 0, 0, 0], // 53
    [0x190, 0xe09, 0, 0], // 54
    [0xe90, 0, 0, 0], // 55
    [0xc0a, 0x230, 0, 0], // 56
    [0x230, 0xd03, 0, 0], // 57
    [0xc39, 0, 0, 0], // 58
    [0xd30, 0, 0, 0], // 59
    [0xc0a, 0x3a0, 0, 0], // 60
    [0xea3, 0, 0, 0], // 61
    [0xda9, 0, 0, 0], // 62
    [0xca0, 0, 0, 0], // 63
    [0x8c0, 0, 0, 0], // 64
    [0x109, 0x8c0, 0, 0], // 65
    [0x203, 0x8c0, 0, 0], // 66
    [0x30a, 0x8c0, 0, 0], // 67
    [0x950, 0, 0, 0], // 68
    [0x859, 0, 0, 0], // 69
    [0x950, 0x203, 0, 0], // 70
    [0xa5a, 0, 0, 0], // 71
    [0x230, 0x8c0, 0, 0], // 72
    [0x230, 0x109, 0x8c0, 0], // 73
    [0x033, 0x8c0, 0, 0], // 74
    [0x8c0, 0x13a, 0, 0], // 75
    [0xb60, 0, 0, 0], // 76
    [0xa69, 0, 0, 0], // 77
    [0x963, 0, 0, 0], // 78
    [0x86a, 0, 0, 0], // 79
    [0x0cc, 0, 0, 0], // 80
    [0x1c5, 0, 0, 0], // 81
    [0x0cc, 0x203, 0, 0], // 82
    [0x3c6, 0, 0, 0], // 83
    [0x15c, 0, 0, 0], // 84
    [0x055, 0, 0, 0], // 85
    [0x203, 0x15c, 0, 0], // 86
    [0x256, 0, 0, 0], // 87
    [0x0cc, 0x230, 0, 0], // 88
    [0x230, 0x1c5, 0, 0], // 89
    [0x0cc, 0x033, 0, 0], // 90
    [0x1f6, 0, 0, 0], // 91
    [0x36c, 0, 0, 0], // 92
    [0x265, 0, 0, 0], // 93
    [0x16f, 0, 0, 0], // 94
    [0x066, 0, 0, 0], // 95
    [0x406, 0x8c0, 0, 0], // 96
    [0x109, 0x406, 0x8c0, 0], // 97
    [0x605, 0x8c0, 0, 0], // 98
    [0x8c0, 0x70c, 0, 0], // 99
    [0x950, 0x406, 0, 0], // 100
    [0x406, 0x859, 0, 0], // 101
    [0x950, 0x605, 0, 0], // 102
    [0xe5c, 0, 0, 0], // 103
    [0x406, 0x230, 0x8c0, 0], // 104
    [0x8c0, 0x230, 0x109, 0x406], // 105
    [0x8c0, 0x435, 0, 0], // 106
    [0x53c, 0x8c0, 0, 0], // 107
    [0x406, 0xb60, 0, 0], // 108
    [0xa69, 0x406, 0, 0], // 109
    [0xd65, 0, 0, 0], // 110
    [0xc6c, 0, 0, 0], // 111
    [0x4ca, 0, 0, 0], // 112
    [0x5c3, 0, 0, 0], // 113
    [0x6c9, 0, 0, 0], // 114
    [0x7c0, 0, 0, 0], // 115
    [0x55a, 0, 0, 0], // 116
    [0x453, 0, 0, 0], // 117
    [0x759, 0, 0, 0], // 118
    [0x650, 0, 0, 0], // 119
    [0x230, 0x4ca, 0, 0], // 120
    [0x5c3, 0x230, 0, 0], // 121
    [0x4f9, 0, 0, 0], // 122
    [0x5f0, 0, 0, 0], // 123
    [0x76a, 0, 0, 0], // 124
    [0x663, 0, 0, 0], // 125
    [0x109, 0x460, 0, 0], // 126
    [0x460, 0, 0, 0], // 127
    [0x460, 0, 0, 0], // 128
    [0x109, 0x460, 0, 0], // 129
    [0x203, 0x460, 0, 0], // 130
    [0x30a, 0x460, 0, 0], // 131
    [0x190, 0x460, 0, 0], // 132
    [0x099, 0x460, 0, 0], // 133
    [0x203, 0x190, 0x460, 0], // 134
    [0x460, 0x29a, 0, 0], // 135
    [0x650, 0, 0, 0], // 136
    [0x650, 0x109, 0, 0], // 137
    [0x453, 0, 0, 0], // 138
    [0x55a, 0, 0, 0], // 139
    [0x7c0, 0, 0, 0], // 140
    [0x6c9, 0, 0, 0], // 141
    [0x5c3, 0, 0, 0], // 142
    [0x4ca, 0, 0, 0], // 143
    [0x460, 0x80c, 0, 0], // 144
    [0x905, 0x460, 0, 0], // 145
    [0x203, 0x460, 0x80c, 0], // 146
    [0x460, 0xb06, 0, 0], // 147
    [0x190, 0x80c, 0x460, 0], // 148
    [0x460, 0x895, 0, 0], // 149
    [0x203, 0x80c, 0x190, 0x460], // 150
    [0xa96, 0x460, 0, 0], // 151
    [0x650, 0x80c, 0, 0], // 152
    [0x650, 0x905, 0, 0], // 153
    [0x80c, 0x453, 0, 0], // 154
    [0xd56, 0, 0, 0], // 155
    [0x80c, 0x7c0, 0, 0], // 156
    [0xec5, 0, 0, 0], // 157
    [0x5c3, 0x80c, 0, 0], // 158
    [0xcc6, 0, 0, 0], // 159
    [0x066, 0, 0, 0], // 160
    [0x066, 0x109, 0, 0], // 161
    [0x265, 0, 0, 0], // 162
    [0x36c, 0, 0, 0], // 163
    [0x066, 0x190, 0, 0], // 164
    [0x099, 0x066, 0, 0], // 165
    [0x190, 0x265, 0, 0], // 166
    [0x2fc, 0, 0, 0], // 167
    [0x256, 0, 0, 0], // 168
    [0x109, 0x256, 0, 0], // 169
    [0x055, 0, 0, 0], // 170
    [0x15c, 0, 0, 0], // 171
    [0x3c6, 0, 0, 0], // 172
    [0x2cf, 0, 0, 0], // 173
    [0x1c5, 0, 0, 0], // 174
    [0x0cc, 0, 0, 0], // 175
    [0x86a, 0, 0, 0], // 176
    [0x963, 0, 0, 0], // 177
    [0xa69, 0, 0, 0], // 178
    [0xb60, 0, 0, 0], // 179
    [0x190, 0x86a, 0, 0], // 180
    [0x8f3, 0, 0, 0], // 181
    [0xa69, 0x190, 0, 0], // 182
    [0xaf0, 0, 0, 0], // 183
    [0xa5a, 0, 0, 0], // 184
    [0xb53, 0, 0, 0], // 185
    [0x859, 0, 0, 0], // 186
    [0x950, 0, 0, 0], // 187
    [0xbca, 0, 0, 0], // 188
    [0x203, 0x8c0, 0, 0], // 189
    [0x9c9, 0, 0, 0], // 190
    [0x8c0, 0, 0, 0], // 191
    [0xca0, 0, 0, 0], // 192
    [0xca0, 0x109, 0, 0], // 193
    [0xca0, 0x203, 0, 0], // 194
    [0xca0, 0x30a, 0, 0], // 195
    [0xd30, 0, 0, 0], // 196
    [0xc39, 0, 0, 0], // 197
    [0x203, 0xd30, 0, 0], // 198
    [0xe3a, 0, 0, 0], // 199
    [0xe90, 0, 0, 0], // 200
    [0x109, 0xe90, 0, 0], // 201
    [0xc93, 0, 0, 0], // 202
    [0xd9a, 0, 0, 0], // 203
    [0xf00, 0, 0, 0], // 204
    [0xe09, 0, 0, 0], // 205
    [0xd03, 0, 0, 0], // 206
    [0xc0a, 0, 0, 0], // 207
    [0x4ac, 0, 0, 0], // 208
    [0x5a5, 0, 0, 0], // 209
    [0x203, 0x4ac, 0, 0], // 210
    [0x7a6, 0, 0, 0], // 211
    [0x53c, 0, 0, 0], // 212
    [0x435, 0, 0, 0], // 213
    [0x53c, 0x203, 0, 0], // 214
    [0x636, 0, 0, 0], // 215
    [0x69c, 0, 0, 0], // 216
    [0x795, 0, 0, 0], // 217
    [0x49f, 0, 0, 0], // 218
    [0x406, 0x190, 0, 0], // 219
    [0x70c, 0, 0, 0], // 220
    [0x605, 0, 0, 0], // 221
    [0x50f, 0, 0, 0], // 222
    [0x406, 0, 0, 0], // 223
    [0x8a6, 0, 0, 0], // 224
    [0x109, 0x8a6, 0, 0], // 225
    [0xaa5, 0, 0, 0], // 226
    [0xbac, 0, 0, 0], // 227
    [0x936, 0, 0, 0], // 228
    [0x83f, 0, 0, 0], // 229
    [0xb35, 0, 0, 0], // 230
    [0x230, 0x80c, 0, 0], // 231
    [0xa96, 0, 0, 0], // 232
    [0xa96, 0x109, 0, 0], // 233
    [0x895, 0, 0, 0], // 234
    [0x99c, 0, 0, 0], // 235
    [0xb06, 0, 0, 0], // 236
    [0xa0f, 0, 0, 0], // 237
    [0x905, 0, 0, 0], // 238
    [0x80c, 0, 0, 0], // 239
    [0x0aa, 0, 0, 0], // 240
    [0x1a3, 0, 0, 0], // 241
    [0x2a9, 0, 0, 0], // 242
    [0x3a0, 0, 0, 0], // 243
    [0x13a, 0, 0, 0], // 244
    [0x033, 0, 0, 0], // 245
    [0x339, 0, 0, 0], // 246
    [0x230, 0, 0, 0], // 247
    [0x29a, 0, 0, 0], // 248
    [0x393, 0, 0, 0], // 249
    [0x099, 0, 0, 0], // 250
    [0x190, 0, 0, 0], // 251
    [0x30a, 0, 0, 0], // 252
    [0x203, 0, 0, 0], // 253
    [0x109, 0, 0, 0], // 254
    [0, 0, 0, 0], // 255
];

/// Ambiguous face direction for every cell configuration.
///
/// An entry of 255 means the configuration needs no manifold correction. Any
/// other value marks a C16 or C19 configuration and encodes where its single
/// ambiguous face lies: bit 0 is the sign along the axis (1 is the positive
/// neighbor), bits 1..=2 select the axis (0 is x, 1 is y, 2 is z).
pub static AMBIGUOUS_FACE_DIR: [u8; 256] = [
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 1, 0, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 3, 255, 255, 2, 255,
    255, 255, 255, 255, 255, 255, 255, 5, 255, 255, 255, 255, 255, 255, 5, 5,
    255, 255, 255, 255, 255, 255, 4, 255, 255, 255, 3, 3, 1, 1, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 5, 255, 5, 255, 5,
    255, 255, 255, 255, 255, 255, 255, 3, 255, 255, 255, 255, 255, 2, 255, 255,
    255, 255, 255, 255, 255, 3, 255, 3, 255, 4, 255, 255, 0, 255, 0, 255,
    255, 255, 255, 255, 255, 255, 255, 1, 255, 255, 255, 0, 255, 255, 255, 255,
    255, 255, 255, 1, 255, 255, 255, 1, 255, 4, 2, 255, 255, 255, 2, 255,
    255, 255, 255, 0, 255, 2, 4, 255, 255, 255, 255, 0, 255, 2, 255, 255,
    255, 255, 255, 255, 255, 255, 4, 255, 255, 4, 255, 255, 255, 255, 255, 255,
];
