pub mod demo;
pub mod predicate;


/*
Disassembly of the compiled demo, as dumped by the bytecode inspector:

func gt(a int, b int) bool
  locals: 2  stack: 2
     0: LOAD_0               ; a
     1: LOAD_1               ; b
     2: GT
     3: RETURN

func main()
  locals: 1  stack: 3
     0: CONST_SHORT 200      ; arguments pushed right to left
     3: CONST_BYTE  100
     5: CALL        #2, 2    ; 'gt'
     9: CALL        #3, 1    ; 'print' -> false
    13: CONST_BYTE  100
    15: CALL        #3, 1    ; 'print' -> 100
    19: CONST_BYTE  100
    21: NEW         #4       ; 'Integer'
    24: STORE_0
    25: LOAD_0
    26: GET_ATTR    #5       ; 'tostr'
    29: CALL        #5, 0
    33: CALL        #3, 1    ; 'print' -> "100"
    37: RETURN
*/
