//! Hand-tuned palette tables.
//!
//! Byte tables hold 8-bit RGB triples and are scaled to `[0, 1]` when the
//! catalog is built. The ODV table is already normalised.

/// Bathymetry shading, pale cyan shallows to deep navy.
#[rustfmt::skip]
pub(crate) static CBATHY: [[u8; 3]; 64] = [
    [8, 241, 255], [8, 237, 255], [8, 234, 255], [8, 231, 255], [8, 228, 255], [8, 225, 255],
    [8, 222, 255], [8, 218, 255], [8, 215, 255], [8, 212, 255], [8, 209, 255], [8, 204, 255],
    [8, 199, 255], [9, 194, 255], [9, 190, 255], [9, 185, 255], [9, 180, 255], [9, 175, 255],
    [9, 171, 255], [9, 166, 255], [9, 161, 255], [9, 160, 255], [9, 158, 255], [9, 157, 255],
    [9, 156, 255], [9, 154, 255], [9, 153, 255], [9, 152, 255], [9, 150, 255], [9, 149, 255],
    [9, 148, 255], [9, 146, 255], [9, 145, 255], [9, 144, 255], [9, 142, 255], [9, 141, 255],
    [10, 140, 255], [10, 134, 255], [10, 129, 255], [10, 124, 255], [10, 119, 255], [10, 114, 255],
    [10, 109, 255], [10, 103, 255], [10, 98, 255], [10, 93, 255], [10, 88, 255], [11, 83, 255],
    [11, 77, 255], [10, 72, 247], [9, 67, 240], [8, 62, 232], [8, 57, 225], [7, 51, 217],
    [6, 46, 210], [5, 41, 202], [5, 36, 195], [4, 31, 188], [3, 25, 180], [2, 20, 173],
    [2, 15, 165], [1, 10, 158], [0, 5, 150], [0, 0, 143],
];

/// NOAA CoastWatch "cool" AVHRR sea-surface temperature palette.
#[rustfmt::skip]
pub(crate) static COOLAVHRRMAP: [[u8; 3]; 256] = [
    [255, 45, 142], [255, 41, 155], [255, 37, 168], [255, 34, 181], [255, 30, 194], [255, 26, 206],
    [255, 23, 219], [255, 19, 232], [255, 30, 194], [255, 19, 232], [250, 30, 194], [250, 19, 232],
    [245, 30, 194], [245, 19, 232], [237, 30, 194], [237, 19, 232], [212, 30, 194], [212, 19, 232],
    [187, 30, 194], [187, 19, 232], [162, 30, 194], [162, 19, 232], [137, 30, 194], [137, 19, 232],
    [112, 30, 194], [112, 19, 232], [87, 30, 194], [87, 19, 232], [62, 30, 194], [62, 19, 232],
    [0, 0, 247], [0, 0, 251], [0, 0, 255], [0, 0, 255], [0, 3, 255], [0, 7, 255],
    [0, 11, 255], [0, 15, 255], [0, 19, 255], [0, 23, 255], [0, 27, 255], [0, 31, 255],
    [0, 35, 255], [0, 39, 255], [0, 43, 255], [0, 47, 255], [0, 51, 255], [0, 55, 255],
    [0, 59, 255], [0, 63, 255], [0, 67, 255], [0, 71, 255], [0, 75, 255], [0, 79, 255],
    [0, 83, 255], [0, 87, 255], [0, 91, 255], [0, 95, 255], [0, 99, 255], [0, 103, 255],
    [0, 107, 255], [0, 111, 255], [0, 115, 255], [0, 119, 255], [0, 123, 255], [0, 127, 255],
    [0, 131, 255], [0, 135, 255], [0, 139, 255], [0, 143, 255], [0, 147, 255], [0, 151, 255],
    [0, 155, 255], [0, 159, 255], [0, 163, 255], [0, 167, 255], [0, 171, 255], [0, 175, 255],
    [0, 179, 255], [0, 183, 255], [0, 187, 255], [0, 191, 255], [0, 195, 255], [0, 199, 255],
    [0, 203, 255], [0, 207, 255], [0, 211, 255], [0, 215, 255], [0, 219, 255], [0, 223, 255],
    [0, 227, 255], [0, 231, 255], [0, 235, 255], [0, 239, 255], [0, 243, 255], [0, 247, 255],
    [0, 251, 255], [0, 255, 255], [0, 255, 255], [3, 255, 251], [7, 255, 247], [11, 255, 243],
    [15, 255, 239], [19, 255, 235], [23, 255, 231], [27, 255, 227], [31, 255, 223], [35, 255, 219],
    [39, 255, 215], [43, 255, 211], [47, 255, 207], [51, 255, 203], [55, 255, 199], [59, 255, 195],
    [63, 255, 191], [67, 255, 187], [71, 255, 183], [75, 255, 179], [79, 255, 175], [83, 255, 171],
    [87, 255, 167], [91, 255, 163], [95, 255, 159], [99, 255, 155], [103, 255, 151], [107, 255, 147],
    [111, 255, 143], [115, 255, 139], [119, 255, 135], [123, 255, 131], [127, 255, 127], [131, 255, 123],
    [135, 255, 119], [139, 255, 115], [143, 255, 111], [147, 255, 107], [151, 255, 103], [155, 255, 99],
    [159, 255, 95], [163, 255, 91], [167, 255, 87], [171, 255, 83], [175, 255, 79], [179, 255, 75],
    [183, 255, 71], [187, 255, 67], [191, 255, 63], [195, 255, 59], [199, 255, 55], [203, 255, 51],
    [207, 255, 47], [211, 255, 43], [215, 255, 39], [219, 255, 35], [223, 255, 31], [227, 255, 27],
    [231, 255, 23], [235, 255, 19], [239, 255, 15], [243, 255, 11], [247, 255, 7], [251, 255, 3],
    [255, 255, 0], [255, 251, 0], [255, 247, 0], [255, 243, 0], [255, 239, 0], [255, 235, 0],
    [255, 231, 0], [255, 227, 0], [255, 223, 0], [255, 219, 0], [255, 215, 0], [255, 211, 0],
    [255, 207, 0], [255, 203, 0], [255, 199, 0], [255, 195, 0], [255, 191, 0], [255, 187, 0],
    [255, 183, 0], [255, 179, 0], [255, 175, 0], [255, 171, 0], [255, 167, 0], [255, 163, 0],
    [255, 159, 0], [255, 155, 0], [255, 151, 0], [255, 147, 0], [255, 143, 0], [255, 139, 0],
    [255, 135, 0], [255, 131, 0], [255, 127, 0], [255, 123, 0], [255, 119, 0], [255, 115, 0],
    [255, 111, 0], [255, 107, 0], [255, 103, 0], [255, 99, 0], [255, 95, 0], [255, 91, 0],
    [255, 87, 0], [255, 83, 0], [255, 79, 0], [255, 75, 0], [255, 71, 0], [255, 67, 0],
    [255, 63, 0], [255, 59, 0], [255, 55, 0], [255, 51, 0], [255, 47, 0], [255, 43, 0],
    [255, 39, 0], [255, 35, 0], [255, 31, 0], [255, 27, 0], [255, 23, 0], [255, 19, 0],
    [255, 15, 0], [255, 11, 0], [255, 7, 0], [255, 3, 0], [255, 0, 0], [250, 0, 0],
    [246, 0, 0], [241, 0, 0], [237, 0, 0], [233, 0, 0], [228, 0, 0], [224, 0, 0],
    [219, 0, 0], [215, 0, 0], [211, 0, 0], [206, 0, 0], [202, 0, 0], [197, 0, 0],
    [193, 0, 0], [189, 0, 0], [184, 0, 0], [180, 0, 0], [175, 0, 0], [171, 0, 0],
    [167, 0, 0], [162, 0, 0], [158, 0, 0], [153, 0, 0], [149, 0, 0], [145, 0, 0],
    [140, 0, 0], [136, 0, 0], [131, 0, 0], [131, 0, 0],
];

/// Remote-sensing rainbow palette.
#[rustfmt::skip]
pub(crate) static RSCOLMAP: [[u8; 3]; 255] = [
    [0, 0, 123], [0, 0, 124], [0, 0, 125], [0, 0, 126], [0, 0, 128], [0, 0, 129],
    [0, 0, 131], [0, 0, 132], [0, 0, 134], [0, 0, 135], [0, 0, 137], [0, 0, 139],
    [0, 0, 140], [0, 0, 142], [0, 0, 144], [0, 3, 146], [0, 6, 148], [0, 9, 150],
    [0, 12, 152], [0, 15, 154], [0, 18, 156], [0, 21, 158], [0, 24, 160], [0, 27, 162],
    [0, 30, 165], [0, 33, 167], [0, 36, 170], [0, 39, 172], [0, 42, 175], [0, 45, 177],
    [0, 49, 180], [0, 52, 183], [0, 56, 186], [0, 60, 190], [0, 64, 193], [0, 68, 196],
    [0, 72, 200], [0, 76, 203], [0, 80, 207], [0, 83, 210], [0, 87, 214], [0, 91, 217],
    [0, 95, 221], [0, 98, 224], [0, 102, 228], [0, 106, 231], [0, 110, 235], [0, 114, 237],
    [0, 119, 239], [0, 124, 241], [0, 129, 244], [0, 133, 246], [0, 138, 248], [0, 143, 250],
    [0, 148, 253], [0, 151, 253], [0, 155, 253], [0, 158, 253], [0, 162, 254], [0, 166, 254],
    [0, 169, 254], [0, 173, 254], [0, 177, 255], [0, 180, 254], [0, 183, 252], [0, 186, 251],
    [0, 190, 249], [0, 193, 247], [0, 196, 246], [0, 199, 244], [0, 203, 242], [0, 204, 237],
    [0, 205, 232], [0, 207, 227], [0, 208, 222], [0, 209, 217], [0, 211, 212], [0, 212, 207],
    [0, 214, 202], [0, 213, 198], [0, 212, 193], [0, 211, 188], [0, 209, 183], [0, 208, 179],
    [0, 207, 174], [0, 206, 169], [0, 204, 164], [0, 203, 160], [0, 202, 155], [0, 200, 150],
    [0, 199, 145], [0, 198, 141], [0, 196, 136], [0, 195, 131], [0, 193, 126], [0, 193, 122],
    [0, 192, 118], [0, 191, 113], [0, 190, 109], [0, 189, 105], [0, 188, 100], [0, 187, 96],
    [0, 186, 91], [0, 186, 88], [0, 186, 85], [0, 186, 81], [0, 186, 78], [0, 186, 75],
    [0, 186, 71], [0, 186, 68], [0, 187, 64], [0, 188, 61], [0, 189, 58], [0, 190, 55],
    [0, 191, 52], [0, 192, 49], [0, 193, 46], [0, 194, 43], [0, 196, 40], [0, 198, 38],
    [0, 200, 35], [0, 202, 32], [0, 204, 29], [0, 206, 27], [0, 208, 24], [0, 210, 21],
    [0, 213, 18], [0, 214, 16], [0, 216, 14], [0, 218, 12], [0, 220, 9], [0, 221, 7],
    [0, 223, 5], [0, 225, 3], [0, 227, 0], [15, 228, 0], [30, 230, 0], [45, 232, 0],
    [60, 234, 0], [75, 236, 0], [90, 238, 0], [105, 240, 0], [120, 242, 0], [128, 243, 0],
    [136, 245, 0], [144, 246, 0], [152, 248, 0], [160, 249, 0], [168, 251, 0], [176, 252, 0],
    [184, 254, 0], [188, 254, 0], [192, 254, 0], [196, 254, 0], [200, 254, 0], [204, 254, 0],
    [208, 254, 0], [212, 254, 0], [217, 254, 0], [219, 253, 0], [221, 251, 0], [223, 250, 0],
    [226, 248, 0], [228, 247, 0], [230, 245, 0], [232, 244, 0], [235, 242, 0], [236, 240, 0],
    [238, 238, 0], [239, 236, 0], [241, 233, 0], [243, 231, 0], [244, 229, 0], [246, 227, 0],
    [248, 224, 0], [248, 222, 0], [249, 220, 0], [250, 218, 0], [251, 216, 0], [251, 214, 0],
    [252, 212, 0], [253, 210, 0], [254, 208, 0], [254, 206, 0], [254, 203, 0], [254, 201, 0],
    [254, 198, 0], [254, 196, 0], [254, 193, 0], [254, 191, 0], [255, 188, 0], [255, 186, 0],
    [255, 183, 0], [255, 180, 0], [254, 177, 0], [254, 175, 0], [254, 172, 0], [254, 169, 0],
    [253, 166, 0], [252, 164, 0], [251, 161, 0], [250, 159, 0], [249, 156, 0], [248, 153, 0],
    [247, 151, 0], [246, 148, 0], [244, 145, 0], [243, 143, 0], [241, 140, 0], [240, 138, 0],
    [238, 135, 0], [237, 132, 0], [235, 130, 0], [234, 127, 0], [232, 124, 0], [231, 122, 0],
    [229, 119, 0], [228, 117, 0], [226, 114, 0], [224, 111, 0], [223, 109, 0], [221, 106, 0],
    [219, 103, 0], [218, 101, 0], [216, 98, 0], [214, 95, 0], [212, 92, 0], [210, 89, 0],
    [208, 86, 0], [206, 83, 0], [204, 80, 0], [202, 77, 0], [200, 74, 0], [198, 71, 0],
    [196, 67, 0], [194, 64, 0], [192, 61, 0], [190, 58, 0], [188, 54, 0], [187, 51, 0],
    [186, 48, 0], [185, 44, 0], [183, 41, 0], [182, 38, 0], [181, 34, 0], [180, 31, 0],
    [178, 27, 0], [177, 24, 0], [176, 21, 0], [175, 17, 0], [173, 14, 0], [172, 11, 0],
    [171, 7, 0], [170, 4, 0], [168, 0, 0],
];

/// Red to green diverging palette.
#[rustfmt::skip]
pub(crate) static REDGREEN: [[u8; 3]; 255] = [
    [127, 255, 127], [128, 253, 126], [128, 252, 126], [129, 251, 125], [129, 250, 125], [130, 249, 124],
    [130, 248, 124], [131, 247, 123], [131, 246, 123], [132, 245, 122], [132, 244, 122], [133, 243, 121],
    [133, 242, 121], [134, 241, 120], [134, 240, 120], [135, 239, 119], [135, 238, 119], [136, 237, 118],
    [136, 236, 118], [137, 235, 117], [137, 234, 117], [138, 233, 116], [138, 232, 116], [139, 231, 115],
    [139, 230, 115], [140, 229, 114], [140, 228, 114], [141, 227, 113], [141, 226, 113], [142, 225, 112],
    [142, 224, 112], [143, 223, 111], [143, 222, 111], [144, 221, 110], [144, 220, 110], [145, 219, 109],
    [145, 218, 109], [146, 217, 108], [146, 216, 108], [147, 215, 107], [147, 214, 107], [148, 213, 106],
    [148, 212, 106], [149, 211, 105], [149, 210, 105], [150, 209, 104], [150, 208, 104], [151, 207, 103],
    [151, 206, 103], [152, 205, 102], [152, 204, 102], [153, 203, 101], [153, 202, 101], [154, 201, 100],
    [154, 200, 100], [155, 199, 99], [155, 198, 99], [156, 197, 98], [156, 196, 98], [157, 195, 97],
    [157, 194, 97], [158, 193, 96], [158, 192, 96], [159, 191, 95], [159, 190, 95], [160, 189, 94],
    [160, 188, 94], [161, 187, 93], [161, 186, 93], [162, 185, 92], [162, 184, 92], [163, 183, 91],
    [163, 182, 91], [164, 181, 90], [164, 180, 90], [165, 179, 89], [165, 178, 89], [166, 177, 88],
    [166, 176, 88], [167, 175, 87], [167, 174, 87], [168, 173, 86], [168, 172, 86], [169, 171, 85],
    [169, 170, 85], [170, 169, 84], [170, 168, 84], [171, 167, 83], [171, 166, 83], [172, 165, 82],
    [172, 164, 82], [173, 163, 81], [173, 162, 81], [174, 161, 80], [174, 160, 80], [175, 159, 79],
    [175, 158, 79], [176, 157, 78], [176, 156, 78], [177, 155, 77], [177, 154, 77], [178, 153, 76],
    [178, 152, 76], [179, 151, 75], [179, 150, 75], [180, 149, 74], [180, 148, 74], [181, 147, 73],
    [181, 146, 73], [182, 145, 72], [182, 144, 72], [183, 143, 71], [183, 142, 71], [184, 141, 70],
    [184, 140, 70], [185, 139, 69], [185, 138, 69], [186, 137, 68], [186, 136, 68], [187, 135, 67],
    [187, 134, 67], [188, 133, 66], [188, 132, 66], [189, 131, 65], [189, 130, 65], [190, 129, 64],
    [190, 128, 64], [191, 127, 63], [191, 126, 63], [192, 125, 62], [192, 124, 62], [193, 123, 61],
    [193, 122, 61], [194, 121, 60], [194, 120, 60], [195, 119, 59], [195, 118, 59], [196, 117, 58],
    [196, 116, 58], [197, 115, 57], [197, 114, 57], [198, 113, 56], [198, 112, 56], [199, 111, 55],
    [199, 110, 55], [200, 109, 54], [200, 108, 54], [201, 107, 53], [201, 106, 53], [202, 105, 52],
    [202, 104, 52], [203, 103, 51], [203, 102, 51], [204, 101, 50], [204, 100, 50], [205, 99, 49],
    [205, 98, 49], [206, 97, 48], [206, 96, 48], [207, 95, 47], [207, 94, 47], [208, 93, 46],
    [208, 92, 46], [209, 91, 45], [209, 90, 45], [210, 89, 44], [210, 88, 44], [211, 87, 43],
    [211, 86, 43], [212, 85, 42], [212, 84, 42], [213, 83, 41], [213, 82, 41], [214, 81, 40],
    [214, 80, 40], [215, 79, 39], [215, 78, 39], [216, 77, 38], [216, 76, 38], [217, 75, 37],
    [217, 74, 37], [218, 73, 36], [218, 72, 36], [219, 71, 35], [219, 70, 35], [220, 69, 34],
    [220, 68, 34], [221, 67, 33], [221, 66, 33], [222, 65, 32], [222, 64, 32], [223, 63, 31],
    [223, 62, 31], [224, 61, 30], [224, 60, 30], [225, 59, 29], [225, 58, 29], [226, 57, 28],
    [226, 56, 28], [227, 55, 27], [227, 54, 27], [228, 53, 26], [228, 52, 26], [229, 51, 25],
    [229, 50, 25], [230, 49, 24], [230, 48, 24], [231, 47, 23], [231, 46, 23], [232, 45, 22],
    [232, 44, 22], [233, 43, 21], [233, 42, 21], [234, 41, 20], [234, 40, 20], [235, 39, 19],
    [235, 38, 19], [236, 37, 18], [236, 36, 18], [237, 35, 17], [237, 34, 17], [238, 33, 16],
    [238, 32, 16], [239, 31, 15], [239, 30, 15], [240, 29, 14], [240, 28, 14], [241, 27, 13],
    [241, 26, 13], [242, 25, 12], [242, 24, 12], [243, 23, 11], [243, 22, 11], [244, 21, 10],
    [244, 20, 10], [245, 19, 9], [245, 18, 9], [246, 17, 8], [246, 16, 8], [247, 15, 7],
    [247, 14, 7], [248, 13, 6], [248, 12, 6], [249, 11, 5], [249, 10, 5], [250, 9, 4],
    [250, 8, 4], [251, 7, 3], [251, 6, 3], [252, 5, 2], [252, 4, 2], [253, 3, 1],
    [253, 2, 1], [254, 1, 0], [255, 0, 0],
];

/// Light red to blue diverging palette.
#[rustfmt::skip]
pub(crate) static REDBLUE_LIGHT: [[u8; 3]; 94] = [
    [127, 0, 0], [136, 0, 0], [145, 0, 0], [154, 0, 0], [163, 0, 0], [173, 0, 0],
    [182, 0, 0], [191, 0, 0], [200, 0, 0], [209, 0, 0], [218, 0, 0], [227, 0, 0],
    [236, 0, 0], [245, 0, 0], [255, 0, 0], [255, 0, 0], [255, 8, 8], [255, 16, 16],
    [255, 24, 24], [255, 32, 32], [255, 41, 41], [255, 49, 49], [255, 57, 57], [255, 65, 65],
    [255, 74, 74], [255, 82, 82], [255, 90, 90], [255, 98, 98], [255, 106, 106], [255, 115, 115],
    [255, 123, 123], [255, 131, 131], [255, 139, 139], [255, 148, 148], [255, 156, 156], [255, 164, 164],
    [255, 172, 172], [255, 180, 180], [255, 189, 189], [255, 197, 197], [255, 205, 205], [255, 213, 213],
    [255, 222, 222], [255, 230, 230], [255, 238, 238], [255, 246, 246], [255, 255, 255], [255, 255, 255],
    [246, 246, 255], [238, 238, 255], [230, 230, 255], [222, 222, 255], [213, 213, 255], [205, 205, 255],
    [197, 197, 255], [189, 189, 255], [180, 180, 255], [172, 172, 255], [164, 164, 255], [156, 156, 255],
    [148, 148, 255], [139, 139, 255], [131, 131, 255], [123, 123, 255], [115, 115, 255], [106, 106, 255],
    [98, 98, 255], [90, 90, 255], [82, 82, 255], [74, 74, 255], [65, 65, 255], [57, 57, 255],
    [49, 49, 255], [41, 41, 255], [32, 32, 255], [24, 24, 255], [16, 16, 255], [8, 8, 255],
    [0, 0, 255], [0, 0, 255], [0, 0, 245], [0, 0, 236], [0, 0, 227], [0, 0, 218],
    [0, 0, 209], [0, 0, 200], [0, 0, 191], [0, 0, 182], [0, 0, 173], [0, 0, 163],
    [0, 0, 154], [0, 0, 145], [0, 0, 136], [0, 0, 127],
];

/// Dark red to blue diverging palette.
#[rustfmt::skip]
pub(crate) static REDBLUE_DARK: [[u8; 3]; 254] = [
    [0, 0, 255], [0, 0, 252], [0, 0, 250], [0, 0, 248], [0, 0, 246], [0, 0, 244],
    [0, 0, 242], [0, 0, 240], [0, 0, 238], [0, 0, 236], [0, 0, 234], [0, 0, 232],
    [0, 0, 230], [0, 0, 228], [0, 0, 226], [0, 0, 224], [0, 0, 222], [0, 0, 220],
    [0, 0, 218], [0, 0, 216], [0, 0, 214], [0, 0, 212], [0, 0, 210], [0, 0, 208],
    [0, 0, 206], [0, 0, 204], [0, 0, 202], [0, 0, 200], [0, 0, 198], [0, 0, 196],
    [0, 0, 194], [0, 0, 192], [0, 0, 190], [0, 0, 188], [0, 0, 186], [0, 0, 184],
    [0, 0, 182], [0, 0, 180], [0, 0, 178], [0, 0, 176], [0, 0, 174], [0, 0, 172],
    [0, 0, 170], [0, 0, 167], [0, 0, 165], [0, 0, 163], [0, 0, 161], [0, 0, 159],
    [0, 0, 157], [0, 0, 155], [0, 0, 153], [0, 0, 151], [0, 0, 149], [0, 0, 147],
    [0, 0, 145], [0, 0, 143], [0, 0, 141], [0, 0, 139], [0, 0, 137], [0, 0, 135],
    [0, 0, 133], [0, 0, 131], [0, 0, 129], [0, 0, 127], [0, 0, 125], [0, 0, 123],
    [0, 0, 121], [0, 0, 119], [0, 0, 117], [0, 0, 115], [0, 0, 113], [0, 0, 111],
    [0, 0, 109], [0, 0, 107], [0, 0, 105], [0, 0, 103], [0, 0, 101], [0, 0, 99],
    [0, 0, 97], [0, 0, 95], [0, 0, 93], [0, 0, 91], [0, 0, 89], [0, 0, 87],
    [0, 0, 85], [0, 0, 82], [0, 0, 80], [0, 0, 78], [0, 0, 76], [0, 0, 74],
    [0, 0, 72], [0, 0, 70], [0, 0, 68], [0, 0, 66], [0, 0, 64], [0, 0, 62],
    [0, 0, 60], [0, 0, 58], [0, 0, 56], [0, 0, 54], [0, 0, 52], [0, 0, 50],
    [0, 0, 48], [0, 0, 46], [0, 0, 44], [0, 0, 42], [0, 0, 40], [0, 0, 38],
    [0, 0, 36], [0, 0, 34], [0, 0, 32], [0, 0, 30], [0, 0, 28], [0, 0, 26],
    [0, 0, 24], [0, 0, 22], [0, 0, 20], [0, 0, 18], [0, 0, 16], [0, 0, 14],
    [0, 0, 12], [0, 0, 10], [0, 0, 8], [0, 0, 6], [0, 0, 4], [0, 0, 2],
    [0, 0, 0], [0, 0, 0], [2, 0, 0], [4, 0, 0], [6, 0, 0], [8, 0, 0],
    [10, 0, 0], [12, 0, 0], [14, 0, 0], [16, 0, 0], [18, 0, 0], [20, 0, 0],
    [22, 0, 0], [24, 0, 0], [26, 0, 0], [28, 0, 0], [30, 0, 0], [32, 0, 0],
    [34, 0, 0], [36, 0, 0], [38, 0, 0], [40, 0, 0], [42, 0, 0], [44, 0, 0],
    [46, 0, 0], [48, 0, 0], [50, 0, 0], [52, 0, 0], [54, 0, 0], [56, 0, 0],
    [58, 0, 0], [60, 0, 0], [62, 0, 0], [64, 0, 0], [66, 0, 0], [68, 0, 0],
    [70, 0, 0], [72, 0, 0], [74, 0, 0], [76, 0, 0], [78, 0, 0], [80, 0, 0],
    [82, 0, 0], [85, 0, 0], [87, 0, 0], [89, 0, 0], [91, 0, 0], [93, 0, 0],
    [95, 0, 0], [97, 0, 0], [99, 0, 0], [101, 0, 0], [103, 0, 0], [105, 0, 0],
    [107, 0, 0], [109, 0, 0], [111, 0, 0], [113, 0, 0], [115, 0, 0], [117, 0, 0],
    [119, 0, 0], [121, 0, 0], [123, 0, 0], [125, 0, 0], [127, 0, 0], [129, 0, 0],
    [131, 0, 0], [133, 0, 0], [135, 0, 0], [137, 0, 0], [139, 0, 0], [141, 0, 0],
    [143, 0, 0], [145, 0, 0], [147, 0, 0], [149, 0, 0], [151, 0, 0], [153, 0, 0],
    [155, 0, 0], [157, 0, 0], [159, 0, 0], [161, 0, 0], [163, 0, 0], [165, 0, 0],
    [167, 0, 0], [170, 0, 0], [172, 0, 0], [174, 0, 0], [176, 0, 0], [178, 0, 0],
    [180, 0, 0], [182, 0, 0], [184, 0, 0], [186, 0, 0], [188, 0, 0], [190, 0, 0],
    [192, 0, 0], [194, 0, 0], [196, 0, 0], [198, 0, 0], [200, 0, 0], [202, 0, 0],
    [204, 0, 0], [206, 0, 0], [208, 0, 0], [210, 0, 0], [212, 0, 0], [214, 0, 0],
    [216, 0, 0], [218, 0, 0], [220, 0, 0], [222, 0, 0], [224, 0, 0], [226, 0, 0],
    [228, 0, 0], [230, 0, 0], [232, 0, 0], [234, 0, 0], [236, 0, 0], [238, 0, 0],
    [240, 0, 0], [242, 0, 0], [244, 0, 0], [246, 0, 0], [248, 0, 0], [250, 0, 0],
    [252, 0, 0], [255, 0, 0],
];

/// Topographic palette from the Cushman-Roisin coastal ocean material.
#[rustfmt::skip]
pub(crate) static CTOPO: [[u8; 3]; 66] = [
    [255, 253, 145], [251, 251, 143], [247, 249, 140], [243, 246, 138], [240, 244, 136], [236, 242, 134],
    [232, 240, 131], [228, 238, 129], [225, 236, 127], [221, 234, 125], [217, 232, 122], [213, 230, 120],
    [210, 227, 118], [206, 225, 116], [202, 223, 114], [198, 221, 111], [195, 219, 109], [191, 217, 107],
    [187, 215, 105], [183, 213, 102], [180, 211, 100], [176, 208, 98], [172, 206, 96], [168, 204, 93],
    [165, 202, 91], [161, 200, 89], [157, 198, 87], [153, 196, 84], [150, 194, 82], [146, 192, 80],
    [142, 190, 78], [138, 187, 76], [135, 185, 73], [131, 183, 71], [127, 181, 69], [124, 179, 67],
    [120, 177, 64], [116, 175, 62], [112, 173, 60], [109, 171, 58], [105, 168, 55], [101, 166, 53],
    [97, 164, 51], [94, 162, 49], [90, 160, 46], [86, 158, 44], [82, 156, 42], [79, 154, 40],
    [75, 152, 38], [71, 149, 35], [67, 147, 33], [64, 145, 31], [60, 143, 29], [56, 141, 26],
    [52, 139, 24], [49, 137, 22], [45, 135, 20], [41, 133, 17], [37, 131, 15], [34, 128, 13],
    [30, 126, 11], [26, 124, 8], [22, 122, 6], [19, 120, 4], [15, 118, 2], [11, 116, 0],
];

/// Ocean Data View default palette.
#[rustfmt::skip]
pub(crate) static ODV: [[f64; 3]; 113] = [
    [0.9360, 0.7790, 0.9390], [0.9200, 0.6910, 0.9160], [0.9040, 0.5740, 0.8900],
    [0.8880, 0.4750, 0.8650], [0.8720, 0.3960, 0.8410], [0.8580, 0.3100, 0.8190],
    [0.8450, 0.2840, 0.8010], [0.8300, 0.3190, 0.7790], [0.8140, 0.4120, 0.7600],
    [0.7930, 0.4870, 0.7500], [0.7730, 0.5640, 0.7510], [0.7380, 0.6060, 0.7630],
    [0.6920, 0.6150, 0.7910], [0.6210, 0.5900, 0.8310], [0.5430, 0.5260, 0.8780],
    [0.4490, 0.4420, 0.9170], [0.3500, 0.3400, 0.9610], [0.2760, 0.2630, 0.9930],
    [0.2000, 0.2370, 1.0000], [0.1470, 0.2450, 0.9920], [0.1070, 0.2690, 0.9660],
    [0.0970, 0.3160, 0.9450], [0.1030, 0.3790, 0.9290], [0.1310, 0.4490, 0.9220],
    [0.1690, 0.5360, 0.9300], [0.2170, 0.6030, 0.9500], [0.2710, 0.6880, 0.9730],
    [0.3260, 0.7550, 0.9900], [0.3760, 0.8100, 0.9910], [0.4180, 0.8710, 0.9690],
    [0.4500, 0.9110, 0.9390], [0.4680, 0.9380, 0.8960], [0.4720, 0.9490, 0.8580],
    [0.4620, 0.9440, 0.8150], [0.4390, 0.9260, 0.7640], [0.4030, 0.8940, 0.7040],
    [0.3570, 0.8560, 0.6380], [0.3060, 0.8170, 0.5730], [0.2520, 0.7830, 0.5140],
    [0.2000, 0.7580, 0.4630], [0.1510, 0.7470, 0.4190], [0.1080, 0.7500, 0.3790],
    [0.0720, 0.7700, 0.3420], [0.0440, 0.8020, 0.3060], [0.0230, 0.8440, 0.2660],
    [0.0150, 0.8750, 0.2360], [0.0180, 0.8960, 0.2100], [0.0300, 0.9070, 0.1890],
    [0.0530, 0.9050, 0.1740], [0.0860, 0.8900, 0.1660], [0.1260, 0.8660, 0.1670],
    [0.1710, 0.8400, 0.1750], [0.2180, 0.8160, 0.1920], [0.2650, 0.7970, 0.2160],
    [0.3110, 0.7850, 0.2460], [0.3550, 0.7790, 0.2790], [0.3970, 0.7800, 0.3130],
    [0.4380, 0.7870, 0.3450], [0.4770, 0.8020, 0.3720], [0.5160, 0.8240, 0.3940],
    [0.5550, 0.8510, 0.4070], [0.5960, 0.8810, 0.4110], [0.6400, 0.9100, 0.4060],
    [0.6860, 0.9330, 0.3930], [0.7360, 0.9470, 0.3720], [0.7860, 0.9490, 0.3440],
    [0.8350, 0.9350, 0.3110], [0.8900, 0.9040, 0.2680], [0.9300, 0.8640, 0.2320],
    [0.9600, 0.8220, 0.1990], [0.9790, 0.7910, 0.1700], [0.9890, 0.7570, 0.1460],
    [0.9940, 0.7330, 0.1250], [0.9970, 0.7100, 0.1070], [0.9990, 0.6820, 0.0910],
    [1.0000, 0.6550, 0.0760], [1.0000, 0.6330, 0.0630], [0.9990, 0.6040, 0.0510],
    [0.9930, 0.5800, 0.0400], [0.9830, 0.5560, 0.0310], [0.9670, 0.5310, 0.0220],
    [0.9460, 0.5080, 0.0160], [0.9220, 0.4800, 0.0100], [0.8980, 0.4500, 0.0050],
    [0.8770, 0.4180, 0.0020], [0.8640, 0.3840, 0.0000], [0.8630, 0.3480, 0.0000],
    [0.8790, 0.3040, 0.0010], [0.9080, 0.2680, 0.0030], [0.9430, 0.2260, 0.0080],
    [0.9730, 0.1700, 0.0140], [0.9920, 0.1200, 0.0210], [0.9970, 0.0710, 0.0300],
    [0.9880, 0.0310, 0.0400], [0.9650, 0.0050, 0.0510], [0.9310, 0.0000, 0.0650],
    [0.8940, 0.0000, 0.0810], [0.8630, 0.0050, 0.0980], [0.8440, 0.0160, 0.1180],
    [0.8360, 0.0320, 0.1400], [0.8370, 0.0540, 0.1650], [0.8430, 0.0840, 0.1930],
    [0.8530, 0.1240, 0.2240], [0.8670, 0.1740, 0.2560], [0.8840, 0.2330, 0.2890],
    [0.9050, 0.3010, 0.3200], [0.9290, 0.3770, 0.3520], [0.9530, 0.4590, 0.3870],
    [0.9770, 0.5460, 0.4280], [0.9970, 0.6340, 0.4730], [1.0000, 0.7140, 0.5190],
    [1.0000, 0.7750, 0.5610], [1.0000, 0.7840, 0.5680],
];
